use anyhow::Result;
use log::debug;
use reqwest::{
    Client,
    header::{ACCEPT, HeaderMap, HeaderValue},
};

use crate::{
    github::{GetReleases, GitHub, GitHubRepo},
    http::HttpClient,
    site_info::{FetchSiteInfo, SiteInfoFetcher, SiteInfoLocation},
    view::FallbackLinks,
};

pub const USER_AGENT: &str = "release-selector";
pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
pub const DEFAULT_REPO: &str = "wizardsupreme/djibon-frontend";
pub const DEFAULT_TITLE: &str = "App Downloads";

/// Builds the client shared by both fetches.
pub fn build_client() -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .build()?;

    Ok(client)
}

/// Everything a command needs, resolved from the command line.
pub struct Config<G: GetReleases, S: FetchSiteInfo> {
    pub repo: GitHubRepo,
    pub github: G,
    pub site_info: S,
    pub fallback: FallbackLinks,
    pub title: String,
}

/// Raw settings as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub repo: Option<String>,
    pub api_url: Option<String>,
    pub site_info: Option<String>,
    pub android_fallback: Option<String>,
    pub ios_fallback: Option<String>,
    pub title: Option<String>,
}

impl Config<GitHub, SiteInfoFetcher> {
    pub fn new(settings: Settings) -> Result<Self> {
        let repo: GitHubRepo = settings.repo.as_deref().unwrap_or(DEFAULT_REPO).parse()?;

        let client = build_client()?;
        let github = GitHub::new(client.clone(), settings.api_url);

        let location = SiteInfoLocation::parse(
            settings
                .site_info
                .as_deref()
                .unwrap_or(crate::site_info::DEFAULT_SITE_INFO),
        );
        let site_info = SiteInfoFetcher::new(HttpClient::new(client), location);

        let defaults = FallbackLinks::default();
        let fallback = FallbackLinks {
            android: settings.android_fallback.unwrap_or(defaults.android),
            ios: settings.ios_fallback.unwrap_or(defaults.ios),
        };

        debug!(
            "Using repo {} via {}, site info from {}",
            repo,
            github.api_url(),
            site_info.location()
        );

        Ok(Self {
            repo,
            github,
            site_info,
            fallback,
            title: settings.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use std::path::PathBuf;

    #[test]
    fn test_config_defaults() {
        let config = Config::new(Settings::default()).unwrap();

        assert_eq!(config.repo.to_string(), DEFAULT_REPO);
        assert_eq!(config.github.api_url(), crate::github::DEFAULT_API_URL);
        assert_eq!(
            config.site_info.location(),
            &SiteInfoLocation::File(PathBuf::from("site-info.json"))
        );
        assert_eq!(config.fallback, FallbackLinks::default());
        assert_eq!(config.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::new(Settings {
            repo: Some("me/app".into()),
            api_url: Some("http://localhost:9999".into()),
            site_info: Some("https://example.com/site-info.json".into()),
            android_fallback: Some("app.apk".into()),
            ios_fallback: Some("app.ipa".into()),
            title: Some("My App".into()),
        })
        .unwrap();

        assert_eq!(config.repo.to_string(), "me/app");
        assert_eq!(config.github.api_url(), "http://localhost:9999");
        assert_eq!(
            config.site_info.location(),
            &SiteInfoLocation::Url("https://example.com/site-info.json".into())
        );
        assert_eq!(config.fallback.android, "app.apk");
        assert_eq!(config.fallback.ios, "app.ipa");
        assert_eq!(config.title, "My App");
    }

    #[test]
    fn test_config_rejects_bad_repo() {
        let result = Config::new(Settings {
            repo: Some("not-a-repo".into()),
            ..Default::default()
        });
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_client_sends_user_agent_and_accept() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .match_header("user-agent", USER_AGENT)
            .match_header("accept", GITHUB_ACCEPT)
            .match_header("authorization", Matcher::Missing)
            .create_async()
            .await;

        let client = build_client().unwrap();
        let _ = client.get(server.url()).send().await;

        mock.assert_async().await;
    }
}
