use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::asset::Platform;

/// One downloadable build of one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseEntry {
    /// Display version, prefix already stripped
    pub version: String,
    /// Never empty
    pub download_url: String,
    /// `None` when the release carried no usable date; such entries sort last
    pub release_date: Option<DateTime<Utc>>,
    pub asset_name: String,
    /// `target_commitish` of the release, when present
    pub commit: Option<String>,
}

/// Entries of one platform, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformList {
    pub platform: Platform,
    pub entries: Vec<ReleaseEntry>,
}

impl PlatformList {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            entries: Vec::new(),
        }
    }

    /// Latest entry, the default selection
    pub fn latest(&self) -> Option<&ReleaseEntry> {
        self.entries.first()
    }

    pub fn get(&self, index: usize) -> Option<&ReleaseEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn push(&mut self, entry: ReleaseEntry) {
        self.entries.push(entry);
    }

    /// Newest first. `sort_by` is stable, so equal dates keep API order.
    pub(crate) fn sort_newest_first(&mut self) {
        self.entries
            .sort_by(|a, b| b.release_date.cmp(&a.release_date));
    }
}

/// The Android and iOS lists derived from one releases payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformLists {
    pub android: PlatformList,
    pub ios: PlatformList,
}

impl PlatformLists {
    pub fn get(&self, platform: Platform) -> &PlatformList {
        match platform {
            Platform::Android => &self.android,
            Platform::Ios => &self.ios,
        }
    }

    pub(crate) fn get_mut(&mut self, platform: Platform) -> &mut PlatformList {
        match platform {
            Platform::Android => &mut self.android,
            Platform::Ios => &mut self.ios,
        }
    }
}

impl Default for PlatformLists {
    fn default() -> Self {
        Self {
            android: PlatformList::new(Platform::Android),
            ios: PlatformList::new(Platform::Ios),
        }
    }
}
