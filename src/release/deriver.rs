//! Derivation of the per-platform download lists from raw releases.
//!
//! Everything here is pure: the same input always yields the same lists, and
//! nothing touches the network or the view.

use anyhow::Result;
use chrono::{DateTime, Utc};
use log::debug;

use super::entry::{PlatformLists, ReleaseEntry};
use super::version::display_version;
use crate::asset::{Platform, matcher_for};
use crate::github::{RawRelease, non_empty};
use crate::http::ReleasesError;

const UNKNOWN_COMMIT: &str = "Unknown";

/// Date and commit of the newest release in API order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestReleaseInfo {
    pub date: Option<DateTime<Utc>>,
    pub commit: String,
}

/// Builds the Android and iOS lists.
///
/// Releases without assets are skipped. Each remaining release contributes at
/// most one entry per platform: its first matching asset. Both lists are then
/// sorted newest first, keeping API order between equal dates.
///
/// Fails with [`ReleasesError::NoReleasesFound`] when `releases` is empty.
#[tracing::instrument(skip(releases), fields(count = releases.len()))]
pub fn derive_platform_lists(releases: &[RawRelease]) -> Result<PlatformLists> {
    if releases.is_empty() {
        return Err(ReleasesError::NoReleasesFound.into());
    }

    let mut lists = PlatformLists::default();

    for release in releases {
        if release.assets.is_empty() {
            continue;
        }

        let version = display_version(release);
        let release_date = parse_date(release.date());

        for platform in Platform::ALL {
            let Some(asset) = matcher_for(platform).find(&release.assets) else {
                continue;
            };

            if asset.browser_download_url.is_empty() {
                debug!(
                    "Skipping {} asset {} of {}: no download URL",
                    platform, asset.name, version
                );
                continue;
            }

            lists.get_mut(platform).push(ReleaseEntry {
                version: version.clone(),
                download_url: asset.browser_download_url.clone(),
                release_date,
                asset_name: asset.name.clone(),
                commit: non_empty(release.target_commitish.as_deref()).map(String::from),
            });
        }
    }

    lists.android.sort_newest_first();
    lists.ios.sort_newest_first();

    debug!(
        "Derived {} Android and {} iOS entries",
        lists.android.len(),
        lists.ios.len()
    );

    Ok(lists)
}

/// Date and commit of `releases[0]`, as listed by the API (not re-sorted).
pub fn latest_release_info(releases: &[RawRelease]) -> Option<LatestReleaseInfo> {
    releases.first().map(|release| LatestReleaseInfo {
        date: parse_date(release.date()),
        commit: non_empty(release.target_commitish.as_deref())
            .unwrap_or(UNKNOWN_COMMIT)
            .to_string(),
    })
}

/// Parses an RFC 3339 timestamp as sent by GitHub.
pub fn parse_date(value: Option<&str>) -> Option<DateTime<Utc>> {
    let value = value?;
    match DateTime::parse_from_rfc3339(value) {
        Ok(date) => Some(date.with_timezone(&Utc)),
        Err(e) => {
            debug!("Ignoring unparseable release date {:?}: {}", value, e);
            None
        }
    }
}
