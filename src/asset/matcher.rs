use super::Platform;
use crate::github::RawAsset;

/// Trait for finding the asset of a release that targets one platform
pub trait AssetMatcher: Send + Sync {
    /// Whether an asset name belongs to this matcher's platform
    fn matches(&self, name: &str) -> bool;

    /// First matching asset in release order
    ///
    /// Returns `None` if no asset matches
    fn find<'a>(&self, assets: &'a [RawAsset]) -> Option<&'a RawAsset> {
        assets.iter().find(|a| self.matches(&a.name))
    }
}

/// Android builds: the name mentions "android" OR is an `.apk`.
pub struct AndroidAssetMatcher;

impl AssetMatcher for AndroidAssetMatcher {
    fn matches(&self, name: &str) -> bool {
        let name_lower = name.to_lowercase();
        name_lower.contains("android") || name_lower.ends_with(".apk")
    }
}

/// iOS builds: the name mentions "ios" AND is a `.zip` or `.ipa`.
///
/// Stricter than the Android rule on purpose: a bare `app.zip` is not an iOS
/// build, and neither is `ios-notes.txt`.
pub struct IosAssetMatcher;

impl AssetMatcher for IosAssetMatcher {
    fn matches(&self, name: &str) -> bool {
        let name_lower = name.to_lowercase();
        name_lower.contains("ios") && (name_lower.ends_with(".zip") || name_lower.ends_with(".ipa"))
    }
}

/// The matcher used for a platform's list
pub fn matcher_for(platform: Platform) -> &'static dyn AssetMatcher {
    match platform {
        Platform::Android => &AndroidAssetMatcher,
        Platform::Ios => &IosAssetMatcher,
    }
}
