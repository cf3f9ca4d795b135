use serde::{Deserialize, Serialize};

/// A file attached to a GitHub release
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone, Default)]
pub struct RawAsset {
    pub name: String,
    #[serde(default)]
    pub browser_download_url: String,
}

/// A release as returned by `GET /repos/{owner}/{repo}/releases`.
///
/// Only the fields the download page reads are kept; everything is optional
/// because drafts and hand-made releases routinely omit some of them.
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone, Default)]
pub struct RawRelease {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tag_name: Option<String>,
    #[serde(default)]
    pub target_commitish: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub assets: Vec<RawAsset>,
}

impl RawRelease {
    /// `published_at`, falling back to `created_at`.
    pub fn date(&self) -> Option<&str> {
        non_empty(self.published_at.as_deref()).or_else(|| non_empty(self.created_at.as_deref()))
    }
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
