//! Application layer: loading the page from the two remote documents.

mod load;

pub use load::{fetch_platform_lists, load_page};
