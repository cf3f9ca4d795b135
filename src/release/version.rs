//! Display versions for release entries.

use crate::github::{RawRelease, non_empty};

const RELEASE_PREFIX: &str = "Release ";
const UNKNOWN_VERSION: &str = "Unknown";

/// Strip one leading `"Release "` or, failing that, one leading `v`.
///
/// Only one prefix is removed: `"Release v1.0"` becomes `"v1.0"`.
pub fn strip_version_prefix(raw: &str) -> &str {
    if let Some(rest) = raw.strip_prefix(RELEASE_PREFIX) {
        rest
    } else {
        raw.strip_prefix('v').unwrap_or(raw)
    }
}

/// The version shown for a release: its name, else its tag, else `"Unknown"`,
/// with the prefix stripped. Empty strings count as absent.
pub fn display_version(release: &RawRelease) -> String {
    let raw = non_empty(release.name.as_deref())
        .or_else(|| non_empty(release.tag_name.as_deref()))
        .unwrap_or(UNKNOWN_VERSION);
    strip_version_prefix(raw).to_string()
}
