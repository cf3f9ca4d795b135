use anyhow::Result;
use log::debug;

use crate::application::fetch_platform_lists;
use crate::config::Config;
use crate::github::GetReleases;
use crate::release::{PlatformList, PlatformLists};
use crate::site_info::FetchSiteInfo;
use crate::view::{NO_RELEASES, option_label};

/// Print both platform lists, newest first.
#[tracing::instrument(skip(config))]
pub async fn list<G: GetReleases, S: FetchSiteInfo>(config: &Config<G, S>, json: bool) -> Result<()> {
    let (lists, _) = fetch_platform_lists(&config.github, &config.repo).await?;

    debug!(
        "Listing {} Android and {} iOS entries",
        lists.android.len(),
        lists.ios.len()
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&lists)?);
    } else {
        print!("{}", format_lists(&lists));
    }

    Ok(())
}

/// Plain-text listing, one block per platform.
pub fn format_lists(lists: &PlatformLists) -> String {
    let mut out = String::new();
    format_list(&mut out, &lists.android);
    out.push('\n');
    format_list(&mut out, &lists.ios);
    out
}

fn format_list(out: &mut String, list: &PlatformList) {
    out.push_str(&format!("{}:\n", list.platform.label()));

    if list.is_empty() {
        out.push_str(&format!("  {}\n", NO_RELEASES));
        return;
    }

    for (index, entry) in list.entries.iter().enumerate() {
        let marker = if index == 0 { "*" } else { " " };
        out.push_str(&format!(
            "{} [{}] {}  {}\n",
            marker,
            index,
            option_label(&entry.version, entry.release_date.as_ref()),
            entry.download_url
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::Platform;
    use crate::release::{ReleaseEntry, parse_date};

    #[test]
    fn test_format_lists() {
        let lists = PlatformLists {
            android: PlatformList {
                platform: Platform::Android,
                entries: vec![
                    ReleaseEntry {
                        version: "2.0".into(),
                        download_url: "https://dl/2.apk".into(),
                        release_date: parse_date(Some("2024-06-01T00:00:00Z")),
                        asset_name: "2.apk".into(),
                        commit: None,
                    },
                    ReleaseEntry {
                        version: "1.0".into(),
                        download_url: "https://dl/1.apk".into(),
                        release_date: None,
                        asset_name: "1.apk".into(),
                        commit: None,
                    },
                ],
            },
            ios: PlatformList::new(Platform::Ios),
        };

        assert_eq!(
            format_lists(&lists),
            "Android:\n\
             * [0] 2.0 (Jun 1, 2024)  https://dl/2.apk\n\
             \x20 [1] 1.0 (Unknown date)  https://dl/1.apk\n\
             \n\
             iOS:\n\
             \x20 No releases available\n"
        );
    }

    #[test]
    fn test_lists_serialize_as_json() {
        let lists = PlatformLists::default();
        let json = serde_json::to_value(&lists).unwrap();
        assert_eq!(json["android"]["platform"], "android");
        assert_eq!(json["ios"]["entries"], serde_json::json!([]));
    }
}
