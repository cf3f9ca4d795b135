//! The download page as data, and its HTML rendering.

mod context;
mod format;
mod html;

pub use context::{
    DownloadButton, ErrorDisplay, FallbackLinks, NO_RELEASES, PlatformView, SelectOption,
    Selection, StatusText, ViewContext,
};
pub use format::{format_date, option_label, sha_from_url};
pub use html::{escape, render_page};
