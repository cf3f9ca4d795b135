//! Asset selection module
//!
//! Decides which file of a release is the Android build and which is the iOS
//! build. The two platforms use deliberately different rules, see
//! [`AndroidAssetMatcher`] and [`IosAssetMatcher`].

mod matcher;
mod platform;

pub use matcher::{AndroidAssetMatcher, AssetMatcher, IosAssetMatcher, matcher_for};
pub use platform::Platform;
