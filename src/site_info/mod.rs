//! The download site's own build stamp (`site-info.json`).
//!
//! The document is optional decoration: any failure to obtain it is logged
//! and the status line simply stays hidden.

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::http::HttpClient;

pub const DEFAULT_SITE_INFO: &str = "site-info.json";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SiteInfo {
    pub date: String,
    pub sha: String,
}

impl SiteInfo {
    /// One-line status shown at the bottom of the page.
    pub fn status_line(&self) -> String {
        format!(
            "Download Site | Updated: {} | SHA: {}",
            self.date, self.sha
        )
    }
}

/// Where `site-info.json` lives.
#[derive(Debug, Clone, PartialEq)]
pub enum SiteInfoLocation {
    Url(String),
    File(PathBuf),
}

impl SiteInfoLocation {
    /// `http://` and `https://` locations are fetched, anything else is a path.
    pub fn parse(value: &str) -> Self {
        let lower = value.to_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            SiteInfoLocation::Url(value.to_string())
        } else {
            SiteInfoLocation::File(PathBuf::from(value))
        }
    }
}

impl std::fmt::Display for SiteInfoLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteInfoLocation::Url(url) => f.write_str(url),
            SiteInfoLocation::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FetchSiteInfo: Send + Sync {
    async fn fetch_site_info(&self) -> Result<SiteInfo>;
}

pub struct SiteInfoFetcher {
    http: HttpClient,
    location: SiteInfoLocation,
}

impl SiteInfoFetcher {
    pub fn new(http: HttpClient, location: SiteInfoLocation) -> Self {
        Self { http, location }
    }

    pub fn location(&self) -> &SiteInfoLocation {
        &self.location
    }
}

#[async_trait]
impl FetchSiteInfo for SiteInfoFetcher {
    #[tracing::instrument(skip(self))]
    async fn fetch_site_info(&self) -> Result<SiteInfo> {
        debug!("Fetching site info from {}...", self.location);

        match &self.location {
            SiteInfoLocation::Url(url) => self.http.get_json::<SiteInfo>(url).await,
            SiteInfoLocation::File(path) => {
                let content = tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("Failed to read site info from {:?}", path))?;
                serde_json::from_str(&content)
                    .with_context(|| format!("Failed to parse site info in {:?}", path))
            }
        }
    }
}

/// Fetches the site info, logging and discarding any failure.
#[tracing::instrument(skip(source))]
pub async fn fetch_site_info_quietly<S: FetchSiteInfo + ?Sized>(source: &S) -> Option<SiteInfo> {
    match source.fetch_site_info().await {
        Ok(info) => Some(info),
        Err(e) => {
            warn!("Error fetching download site info: {:#}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use reqwest::Client;

    #[test]
    fn test_status_line() {
        let info = SiteInfo {
            date: "2024-06-01 12:00".to_string(),
            sha: "abc1234".to_string(),
        };
        assert_eq!(
            info.status_line(),
            "Download Site | Updated: 2024-06-01 12:00 | SHA: abc1234"
        );
    }

    #[test]
    fn test_location_parse() {
        assert_eq!(
            SiteInfoLocation::parse("https://example.com/site-info.json"),
            SiteInfoLocation::Url("https://example.com/site-info.json".to_string())
        );
        assert_eq!(
            SiteInfoLocation::parse("HTTP://example.com/x"),
            SiteInfoLocation::Url("HTTP://example.com/x".to_string())
        );
        assert_eq!(
            SiteInfoLocation::parse("site-info.json"),
            SiteInfoLocation::File(PathBuf::from("site-info.json"))
        );
    }

    #[tokio::test]
    async fn test_fetch_from_url() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/site-info.json")
            .match_query(Matcher::Regex(r"^_=\d+$".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"date": "2024-06-01", "sha": "abc1234"}"#)
            .create_async()
            .await;

        let fetcher = SiteInfoFetcher::new(
            HttpClient::new(Client::new()),
            SiteInfoLocation::Url(format!("{}/site-info.json", url)),
        );
        let info = fetcher.fetch_site_info().await.unwrap();

        mock.assert_async().await;
        assert_eq!(info.sha, "abc1234");
        assert_eq!(info.date, "2024-06-01");
    }

    #[tokio::test]
    async fn test_fetch_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site-info.json");
        std::fs::write(&path, r#"{"date": "2024-06-02", "sha": "def5678"}"#).unwrap();

        let fetcher = SiteInfoFetcher::new(
            HttpClient::new(Client::new()),
            SiteInfoLocation::File(path),
        );
        let info = fetcher.fetch_site_info().await.unwrap();

        assert_eq!(info.date, "2024-06-02");
        assert_eq!(info.sha, "def5678");
    }

    #[tokio::test]
    async fn test_fetch_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = SiteInfoFetcher::new(
            HttpClient::new(Client::new()),
            SiteInfoLocation::File(dir.path().join("missing.json")),
        );
        assert!(fetcher.fetch_site_info().await.is_err());
    }

    #[tokio::test]
    async fn test_quietly_swallows_errors() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/site-info.json")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let fetcher = SiteInfoFetcher::new(
            HttpClient::new(Client::new()),
            SiteInfoLocation::Url(format!("{}/site-info.json", url)),
        );

        assert!(fetch_site_info_quietly(&fetcher).await.is_none());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_quietly_passes_through_success() {
        let mut source = MockFetchSiteInfo::new();
        source.expect_fetch_site_info().times(1).returning(|| {
            Ok(SiteInfo {
                date: "d".into(),
                sha: "s".into(),
            })
        });

        let info = fetch_site_info_quietly(&source).await.unwrap();
        assert_eq!(info.status_line(), "Download Site | Updated: d | SHA: s");
    }
}
