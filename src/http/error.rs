//! Error kinds surfaced by the releases fetch and classification of HTTP failures.

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use reqwest::header::HeaderMap;

const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";
const RATE_LIMIT_RESET: &str = "x-ratelimit-reset";

/// Failures of the releases pipeline that the page reports to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum ReleasesError {
    /// HTTP 403 with no requests left in the current window.
    /// Carries the reset time when the API announced one.
    RateLimited(Option<DateTime<Utc>>),
    /// Any other non-2xx status.
    ApiError(u16),
    /// The API answered with an empty release list.
    NoReleasesFound,
    /// Transport failure or a body that is not a release list.
    NetworkOrParseFailure(String),
}

impl std::fmt::Display for ReleasesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReleasesError::RateLimited(Some(reset)) => write!(
                f,
                "GitHub API rate limit exceeded. Try again after {}.",
                reset.format("%H:%M:%S UTC")
            ),
            ReleasesError::RateLimited(None) => {
                write!(f, "GitHub API rate limit exceeded. Try again later.")
            }
            ReleasesError::ApiError(status) => write!(f, "GitHub API error: {}", status),
            ReleasesError::NoReleasesFound => write!(f, "No releases found for this repository"),
            ReleasesError::NetworkOrParseFailure(detail) => {
                write!(f, "Failed to load releases: {}", detail)
            }
        }
    }
}

impl std::error::Error for ReleasesError {}

/// Maps a non-success response to the error kind shown on the page.
///
/// Only a 403 whose `X-RateLimit-Remaining` header is exactly `0` counts as
/// rate limiting; every other status is reported as a plain API error.
pub fn classify_status(status: StatusCode, headers: &HeaderMap) -> ReleasesError {
    if status == StatusCode::FORBIDDEN && header_str(headers, RATE_LIMIT_REMAINING) == Some("0") {
        let reset = header_str(headers, RATE_LIMIT_RESET)
            .and_then(|v| v.trim().parse::<i64>().ok())
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0));
        return ReleasesError::RateLimited(reset);
    }

    ReleasesError::ApiError(status.as_u16())
}

/// Recovers the page-level error kind from an arbitrary failure.
/// Anything not already classified is a network or parse failure.
pub fn to_releases_error(error: &anyhow::Error) -> ReleasesError {
    match error.downcast_ref::<ReleasesError>() {
        Some(known) => known.clone(),
        None => ReleasesError::NetworkOrParseFailure(format!("{:#}", error)),
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(*value));
        }
        map
    }

    #[test]
    fn test_rate_limited_with_reset() {
        let err = classify_status(
            StatusCode::FORBIDDEN,
            &headers(&[
                ("x-ratelimit-remaining", "0"),
                ("x-ratelimit-reset", "1700000000"),
            ]),
        );

        let expected = DateTime::<Utc>::from_timestamp(1_700_000_000, 0);
        assert_eq!(err, ReleasesError::RateLimited(expected));
        assert_eq!(
            err.to_string(),
            "GitHub API rate limit exceeded. Try again after 22:13:20 UTC."
        );
    }

    #[test]
    fn test_rate_limited_without_reset() {
        let err = classify_status(
            StatusCode::FORBIDDEN,
            &headers(&[("x-ratelimit-remaining", "0")]),
        );
        assert_eq!(err, ReleasesError::RateLimited(None));
        assert!(err.to_string().contains("Try again later"));
    }

    #[test]
    fn test_forbidden_with_remaining_quota_is_api_error() {
        let err = classify_status(
            StatusCode::FORBIDDEN,
            &headers(&[("x-ratelimit-remaining", "12")]),
        );
        assert_eq!(err, ReleasesError::ApiError(403));

        let err = classify_status(StatusCode::FORBIDDEN, &HeaderMap::new());
        assert_eq!(err, ReleasesError::ApiError(403));
    }

    #[test]
    fn test_other_statuses_are_api_errors() {
        let err = classify_status(StatusCode::NOT_FOUND, &HeaderMap::new());
        assert_eq!(err.to_string(), "GitHub API error: 404");

        // A zero quota only matters on 403.
        let err = classify_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            &headers(&[("x-ratelimit-remaining", "0")]),
        );
        assert_eq!(err, ReleasesError::ApiError(500));
    }

    #[test]
    fn test_to_releases_error() {
        let known = anyhow::Error::from(ReleasesError::NoReleasesFound);
        assert_eq!(to_releases_error(&known), ReleasesError::NoReleasesFound);

        let unknown = anyhow::anyhow!("connection reset");
        assert_eq!(
            to_releases_error(&unknown),
            ReleasesError::NetworkOrParseFailure("connection reset".to_string())
        );
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ReleasesError::NoReleasesFound.to_string(),
            "No releases found for this repository"
        );
        assert_eq!(
            ReleasesError::NetworkOrParseFailure("bad json".into()).to_string(),
            "Failed to load releases: bad json"
        );
    }
}
