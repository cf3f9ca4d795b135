//! Page state: what the download page shows, independent of how it is drawn.

use anyhow::{Result, bail};
use log::debug;

use super::format::{format_date, option_label, sha_from_url};
use crate::asset::Platform;
use crate::release::{LatestReleaseInfo, PlatformList, ReleaseEntry};
use crate::site_info::SiteInfo;

pub const NO_RELEASES: &str = "No releases available";
const UNKNOWN_SHA: &str = "Unknown";

/// One option of a platform's selectable list.
///
/// Real options keep the entry they were rendered from, so a selection reads
/// it back directly.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub label: String,
    /// Download URL, empty for the placeholder
    pub value: String,
    pub entry: Option<ReleaseEntry>,
}

impl SelectOption {
    fn placeholder() -> Self {
        Self {
            label: NO_RELEASES.to_string(),
            value: String::new(),
            entry: None,
        }
    }

    fn from_entry(entry: &ReleaseEntry) -> Self {
        Self {
            label: option_label(&entry.version, entry.release_date.as_ref()),
            value: entry.download_url.clone(),
            entry: Some(entry.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DownloadButton {
    pub href: Option<String>,
    /// Text of the version display next to the button
    pub version_label: String,
    pub enabled: bool,
}

impl DownloadButton {
    fn point_at(&mut self, entry: &ReleaseEntry) {
        self.href = Some(entry.download_url.clone());
        self.version_label = entry.version.clone();
        self.enabled = true;
    }

    fn disable(&mut self) {
        self.href = None;
        self.version_label = NO_RELEASES.to_string();
        self.enabled = false;
    }
}

/// Selectable list plus download button of one platform.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformView {
    pub platform: Platform,
    pub options: Vec<SelectOption>,
    pub selected: usize,
    pub disabled: bool,
    pub button: DownloadButton,
}

impl PlatformView {
    fn new(platform: Platform) -> Self {
        Self {
            platform,
            options: Vec::new(),
            selected: 0,
            disabled: false,
            button: DownloadButton::default(),
        }
    }
}

/// Text element that stays hidden until it has something to say.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatusText {
    pub text: String,
    pub visible: bool,
}

impl StatusText {
    fn show(&mut self, text: String) {
        self.text = text;
        self.visible = true;
    }
}

/// Static links offered when the releases could not be loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackLinks {
    pub android: String,
    pub ios: String,
}

impl Default for FallbackLinks {
    fn default() -> Self {
        Self {
            android: "djibon-app.apk".to_string(),
            ios: "djibon-ios.zip".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorDisplay {
    pub message: String,
    pub fallback: FallbackLinks,
}

/// Result of picking an option.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub platform: Platform,
    pub index: usize,
    pub entry: ReleaseEntry,
}

impl Selection {
    pub fn is_latest(&self) -> bool {
        self.index == 0
    }
}

/// Everything the download page displays.
///
/// Built once at startup and passed to whatever fills or draws it.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewContext {
    pub android: PlatformView,
    pub ios: PlatformView,
    pub release_info: StatusText,
    pub site_info: StatusText,
    pub error: Option<ErrorDisplay>,
    pub loading: bool,
    pub fallback: FallbackLinks,
}

impl ViewContext {
    pub fn new(fallback: FallbackLinks) -> Self {
        Self {
            android: PlatformView::new(Platform::Android),
            ios: PlatformView::new(Platform::Ios),
            release_info: StatusText::default(),
            site_info: StatusText::default(),
            error: None,
            loading: false,
            fallback,
        }
    }

    pub fn platform(&self, platform: Platform) -> &PlatformView {
        match platform {
            Platform::Android => &self.android,
            Platform::Ios => &self.ios,
        }
    }

    fn platform_mut(&mut self, platform: Platform) -> &mut PlatformView {
        match platform {
            Platform::Android => &mut self.android,
            Platform::Ios => &mut self.ios,
        }
    }

    /// Shows or hides the loading indicator; both lists are disabled while it shows.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        self.android.disabled = loading;
        self.ios.disabled = loading;
    }

    /// Replaces a platform's options with `list` and selects the latest entry.
    pub fn populate(&mut self, list: &PlatformList) {
        let view = self.platform_mut(list.platform);
        view.selected = 0;

        if list.is_empty() {
            view.options = vec![SelectOption::placeholder()];
            view.button.disable();
            return;
        }

        view.options = list.entries.iter().map(SelectOption::from_entry).collect();
        if let Some(latest) = list.latest() {
            view.button.point_at(latest);
        }
    }

    /// Picks option `index` of `platform` and updates its button.
    ///
    /// Picking the latest entry also refreshes the release info line.
    /// Returns `None` when the list only holds the placeholder.
    pub fn select(&mut self, platform: Platform, index: usize) -> Result<Option<Selection>> {
        let view = self.platform_mut(platform);
        let count = view.options.len();
        let Some(option) = view.options.get(index) else {
            bail!(
                "{} has {} option(s), cannot select #{}",
                platform.label(),
                count,
                index
            );
        };

        view.selected = index;

        let Some(entry) = option.entry.clone() else {
            view.button.disable();
            return Ok(None);
        };

        view.button.point_at(&entry);
        debug!("Selected {} {} ({})", platform.label(), entry.version, entry.asset_name);

        let selection = Selection {
            platform,
            index,
            entry,
        };

        if selection.is_latest() {
            let sha = sha_from_url(&selection.entry.download_url).unwrap_or(UNKNOWN_SHA);
            self.release_info.show(format!(
                "Released ({}): {}",
                format_date(selection.entry.release_date.as_ref()),
                sha
            ));
        }

        Ok(Some(selection))
    }

    pub fn show_release_info(&mut self, info: &LatestReleaseInfo) {
        self.release_info.show(format!(
            "Released ({}): {}",
            format_date(info.date.as_ref()),
            info.commit
        ));
    }

    pub fn show_site_info(&mut self, info: &SiteInfo) {
        self.site_info.show(info.status_line());
    }

    /// Shows `message` with the fallback links and clears the loading state.
    pub fn show_error(&mut self, message: &str) {
        self.error = Some(ErrorDisplay {
            message: format!("Error: {}", message),
            fallback: self.fallback.clone(),
        });
        self.set_loading(false);
    }
}
