use anyhow::Result;
use log::{error, info};

use crate::github::{GetReleases, GitHubRepo};
use crate::http::{ReleasesError, to_releases_error};
use crate::release::{LatestReleaseInfo, PlatformLists, derive_platform_lists, latest_release_info};
use crate::site_info::{FetchSiteInfo, fetch_site_info_quietly};
use crate::view::ViewContext;

/// Fetches the releases of `repo` and derives both platform lists.
///
/// Also returns the date and commit of the first release the API listed.
#[tracing::instrument(skip(github))]
pub async fn fetch_platform_lists<G: GetReleases + ?Sized>(
    github: &G,
    repo: &GitHubRepo,
) -> Result<(PlatformLists, Option<LatestReleaseInfo>)> {
    let releases = github.get_releases(repo).await?;
    let lists = derive_platform_lists(&releases)?;
    Ok((lists, latest_release_info(&releases)))
}

/// Loads the page: both fetches run concurrently, then their results are
/// applied to `view`.
///
/// A releases failure is logged and shown on the page (with the fallback
/// links) and also returned. A site-info failure only leaves the status line
/// hidden. The loading indicator is cleared on every path.
#[tracing::instrument(skip(github, site_info, view))]
pub async fn load_page<G, S>(
    github: &G,
    site_info: &S,
    repo: &GitHubRepo,
    view: &mut ViewContext,
) -> Result<PlatformLists, ReleasesError>
where
    G: GetReleases + ?Sized,
    S: FetchSiteInfo + ?Sized,
{
    view.set_loading(true);

    let (releases, site) = tokio::join!(
        fetch_platform_lists(github, repo),
        fetch_site_info_quietly(site_info)
    );

    if let Some(site) = site {
        view.show_site_info(&site);
    }

    let outcome = match releases {
        Ok((lists, latest)) => {
            if let Some(latest) = &latest {
                view.show_release_info(latest);
            }
            view.populate(&lists.android);
            view.populate(&lists.ios);
            info!(
                "Loaded {} Android and {} iOS release(s) for {}",
                lists.android.len(),
                lists.ios.len(),
                repo
            );
            Ok(lists)
        }
        Err(e) => {
            let err = to_releases_error(&e);
            error!("Error fetching releases: {:#}", e);
            view.show_error(&err.to_string());
            Err(err)
        }
    };

    view.set_loading(false);
    outcome
}
