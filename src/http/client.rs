//! HTTP client shared by the releases and site-info fetchers.

use anyhow::{Context, Result};
use log::debug;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

/// Name of the throwaway query parameter that defeats intermediate caches.
pub const CACHE_BUST_PARAM: &str = "_";

/// Thin wrapper over a reqwest `Client`.
///
/// Every request carries a cache-busting `_=<millis>` query parameter. There
/// are no retries: a failed request is reported once and the caller decides
/// what to do with it.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Sends a cache-busted GET and returns the response whatever its status.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, url: &str) -> Result<Response> {
        let bust = cache_bust();
        debug!("GET {} ({}={})...", url, CACHE_BUST_PARAM, bust);

        self.client
            .get(url)
            .query(&[(CACHE_BUST_PARAM, bust.as_str())])
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", url))
    }

    /// Performs a cache-busted GET and deserializes the JSON response.
    /// Non-2xx statuses are errors.
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.get(url).await?.error_for_status()?;

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))
    }
}

/// Current Unix time in milliseconds, as used for the cache-busting parameter.
pub fn cache_bust() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_get_json_success() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/site-info.json")
            .match_query(Matcher::Regex(r"^_=\d+$".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"name": "test", "value": 42}"#)
            .create_async()
            .await;

        let client = HttpClient::new(Client::new());

        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct TestResponse {
            name: String,
            value: i32,
        }

        let result: TestResponse = client
            .get_json(&format!("{}/site-info.json", url))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result.name, "test");
        assert_eq!(result.value, 42);
    }

    #[tokio::test]
    async fn test_get_json_not_found() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/site-info.json")
            .match_query(Matcher::Any)
            .with_status(404)
            .create_async()
            .await;

        let client = HttpClient::new(Client::new());
        let result: Result<serde_json::Value> =
            client.get_json(&format!("{}/site-info.json", url)).await;

        mock.assert_async().await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_get_returns_error_statuses() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/x")
            .match_query(Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let client = HttpClient::new(Client::new());
        let response = client.get(&format!("{}/x", url)).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.status().as_u16(), 503);
    }

    #[tokio::test]
    async fn test_get_unreachable_host_fails() {
        let client = HttpClient::new(Client::new());
        let result = client.get("http://127.0.0.1:1/unreachable").await;
        assert!(result.is_err());
    }

    #[test]
    fn test_cache_bust_is_numeric() {
        let bust = cache_bust();
        assert!(!bust.is_empty());
        assert!(bust.chars().all(|c| c.is_ascii_digit()));
    }
}
