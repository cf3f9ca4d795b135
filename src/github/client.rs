use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use super::repo::GitHubRepo;
use super::types::RawRelease;
use crate::http::{HttpClient, ReleasesError, classify_status};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GetReleases: Send + Sync {
    /// Fetches the first page of releases, in API order.
    ///
    /// Failures are `ReleasesError` values wrapped in `anyhow::Error`.
    async fn get_releases(&self, repo: &GitHubRepo) -> Result<Vec<RawRelease>>;
    fn api_url(&self) -> &str;
}

pub struct GitHub {
    pub http: HttpClient,
    pub api_url: String,
}

impl GitHub {
    #[tracing::instrument(skip(client, api_url))]
    pub fn new(client: Client, api_url: Option<String>) -> Self {
        let api_url = api_url
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self {
            http: HttpClient::new(client),
            api_url,
        }
    }
}

#[async_trait]
impl GetReleases for GitHub {
    #[tracing::instrument(skip(self, repo))]
    async fn get_releases(&self, repo: &GitHubRepo) -> Result<Vec<RawRelease>> {
        GitHub::fetch_releases(repo, &self.http, &self.api_url).await
    }

    #[tracing::instrument(skip(self))]
    fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl GitHub {
    #[tracing::instrument(skip(http, api_url))]
    pub async fn fetch_releases(
        repo: &GitHubRepo,
        http: &HttpClient,
        api_url: &str,
    ) -> Result<Vec<RawRelease>> {
        let url = format!("{}{}", api_url, repo.releases_path());

        debug!("Fetching releases of {} from {}...", repo, url);

        let response = http
            .get(&url)
            .await
            .map_err(|e| ReleasesError::NetworkOrParseFailure(format!("{:#}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let err = classify_status(status, response.headers());
            debug!("Releases request for {} failed: {}", repo, err);
            return Err(err.into());
        }

        // A `null` body means no releases, not a malformed one.
        let releases: Vec<RawRelease> = response
            .json::<Option<Vec<RawRelease>>>()
            .await
            .map_err(|e| ReleasesError::NetworkOrParseFailure(e.to_string()))?
            .ok_or(ReleasesError::NoReleasesFound)?;

        debug!("Fetched {} release(s) for {}", releases.len(), repo);

        Ok(releases)
    }
}
