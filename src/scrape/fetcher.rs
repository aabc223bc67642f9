//! HTTP fetcher for player profile pages
//!
//! This module handles all HTTP requests for the pipeline:
//! - Building an HTTP client with the configured user agent and timeouts
//! - GET requests for page markup
//! - Error classification at the fetch boundary
//!
//! A fetch failure aborts only the one player's pipeline run; the batch
//! carries on with the remaining players.

use crate::config::ScraperConfig;
use crate::CreaseError;
use reqwest::Client;
use std::time::Duration;

/// Builds an HTTP client from the scraper configuration.
pub fn build_http_client(config: &ScraperConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches raw page markup for a player profile URL.
///
/// Non-2xx responses and transport failures both map to
/// [`CreaseError::Fetch`] with the offending URL attached.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, CreaseError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| fetch_error(url, &e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(CreaseError::Fetch {
            url: url.to_string(),
            message: format!("HTTP {}", status.as_u16()),
        });
    }

    response.text().await.map_err(|e| fetch_error(url, &e))
}

fn fetch_error(url: &str, error: &reqwest::Error) -> CreaseError {
    let message = if error.is_timeout() {
        "Request timeout".to_string()
    } else if error.is_connect() {
        "Connection refused".to_string()
    } else {
        error.to_string()
    };

    CreaseError::Fetch {
        url: url.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ScraperConfig {
        ScraperConfig {
            user_agent: "crease-test/1.0".to_string(),
            request_timeout_secs: 30,
            scoring_policy: "normalized".to_string(),
        }
    }

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&test_config());
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_success() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/players/test-player-1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&server)
            .await;

        let client = build_http_client(&test_config()).unwrap();
        let url = format!("{}/players/test-player-1", server.uri());
        let body = fetch_page(&client, &url).await.unwrap();
        assert_eq!(body, "<html></html>");
    }

    #[tokio::test]
    async fn test_fetch_not_found_is_error() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/players/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = build_http_client(&test_config()).unwrap();
        let url = format!("{}/players/missing", server.uri());
        let result = fetch_page(&client, &url).await;

        match result {
            Err(CreaseError::Fetch { message, .. }) => assert_eq!(message, "HTTP 404"),
            other => panic!("expected fetch error, got {:?}", other.map(|_| ())),
        }
    }
}
