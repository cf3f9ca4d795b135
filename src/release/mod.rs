//! Release entries and their derivation from the GitHub payload.

mod deriver;
mod entry;
mod version;

pub use deriver::{LatestReleaseInfo, derive_platform_lists, latest_release_info, parse_date};
pub use entry::{PlatformList, PlatformLists, ReleaseEntry};
pub use version::{display_version, strip_version_prefix};
