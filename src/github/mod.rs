//! GitHub releases API access.

mod client;
mod repo;
mod types;

pub use client::{DEFAULT_API_URL, GetReleases, GitHub};
pub use repo::GitHubRepo;
pub use types::{RawAsset, RawRelease};

pub(crate) use types::non_empty;

#[cfg(test)]
pub use client::MockGetReleases;
