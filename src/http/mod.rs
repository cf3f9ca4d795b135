//! HTTP client and error classification for the page's two fetches.

mod client;
mod error;

pub use client::{CACHE_BUST_PARAM, HttpClient, cache_bust};
pub use error::{ReleasesError, classify_status, to_releases_error};
