//! Command implementations behind the CLI subcommands.

mod list;
mod render;
mod select;

pub use list::{format_lists, list};
pub use render::render;
pub use select::{describe_selection, select};
