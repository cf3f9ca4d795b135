use anyhow::Result;

use crate::application::load_page;
use crate::asset::Platform;
use crate::config::Config;
use crate::github::GetReleases;
use crate::site_info::FetchSiteInfo;
use crate::view::{Selection, ViewContext};

/// Loads the page, picks option `index` of `platform` and prints the result.
#[tracing::instrument(skip(config))]
pub async fn select<G: GetReleases, S: FetchSiteInfo>(
    config: &Config<G, S>,
    platform: Platform,
    index: usize,
) -> Result<()> {
    print!("{}", selection_report(config, platform, index).await?);
    Ok(())
}

async fn selection_report<G: GetReleases, S: FetchSiteInfo>(
    config: &Config<G, S>,
    platform: Platform,
    index: usize,
) -> Result<String> {
    let mut view = ViewContext::new(config.fallback.clone());
    load_page(&config.github, &config.site_info, &config.repo, &mut view).await?;

    let selection = view.select(platform, index)?;
    Ok(describe_selection(&view, platform, selection.as_ref()))
}

/// What the page shows for `platform` after a selection.
pub fn describe_selection(view: &ViewContext, platform: Platform, selection: Option<&Selection>) -> String {
    let button = &view.platform(platform).button;
    let mut out = format!("{} version: {}\n", platform.label(), button.version_label);

    match (selection, &button.href) {
        (Some(selection), Some(href)) => {
            out.push_str(&format!("Asset: {}\n", selection.entry.asset_name));
            out.push_str(&format!("Download: {}\n", href));
        }
        _ => out.push_str("Download: unavailable\n"),
    }

    if view.release_info.visible {
        out.push_str(&format!("{}\n", view.release_info.text));
    }
    if view.site_info.visible {
        out.push_str(&format!("{}\n", view.site_info.text));
    }

    out
}
