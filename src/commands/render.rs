use anyhow::{Context, Result};
use log::{info, warn};
use std::path::PathBuf;

use crate::application::load_page;
use crate::config::Config;
use crate::github::GetReleases;
use crate::site_info::FetchSiteInfo;
use crate::view::{ViewContext, render_page};

/// Loads the page and writes it as HTML to `output`, or stdout.
///
/// A releases failure does not fail the command: the page carries the error
/// message and the fallback links.
#[tracing::instrument(skip(config))]
pub async fn render<G: GetReleases, S: FetchSiteInfo>(
    config: &Config<G, S>,
    output: Option<PathBuf>,
) -> Result<()> {
    let mut view = ViewContext::new(config.fallback.clone());

    if let Err(e) = load_page(&config.github, &config.site_info, &config.repo, &mut view).await {
        warn!("Rendering page with error: {}", e);
    }

    let html = render_page(&view, &config.title);

    match output {
        Some(path) => {
            tokio::fs::write(&path, html)
                .await
                .with_context(|| format!("Failed to write page to {:?}", path))?;
            info!("Wrote download page to {:?}", path);
        }
        None => print!("{}", html),
    }

    Ok(())
}
