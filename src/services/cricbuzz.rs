use crate::config::UpstreamSettings;
use crate::models::Endpoint;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

pub const API_KEY_HEADER: &str = "x-rapidapi-key";
pub const API_HOST_HEADER: &str = "x-rapidapi-host";

/// Errors that can occur when calling the cricket-data API
///
/// Callers see all of these as "upstream call failed"; the variants only
/// sharpen the message and the logs.
#[derive(Debug, Error)]
pub enum CricbuzzError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Upstream request timed out: {0}")]
    Timeout(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

impl CricbuzzError {
    fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CricbuzzError::Timeout(err.to_string())
        } else {
            CricbuzzError::RequestError(err)
        }
    }
}

/// Cricbuzz (RapidAPI) client
///
/// Every call is a GET carrying the fixed key/host header pair. The response
/// status is not inspected beyond logging: whatever JSON the upstream sends
/// back is handed to the caller.
pub struct CricbuzzClient {
    base_url: String,
    api_key: String,
    api_host: String,
    client: Client,
}

impl CricbuzzClient {
    /// Create a new client
    pub fn new(
        base_url: String,
        api_key: String,
        api_host: String,
        timeout: Duration,
    ) -> Result<Self, CricbuzzError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(CricbuzzError::ClientBuild)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            api_host,
            client,
        })
    }

    pub fn from_settings(settings: &UpstreamSettings) -> Result<Self, CricbuzzError> {
        Self::new(
            settings.base_url.clone(),
            settings.api_key.clone(),
            settings.api_host.clone(),
            settings.timeout(),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint
    pub fn url_for(&self, endpoint: &Endpoint<'_>) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// Issue a single GET against the endpoint and parse the body as JSON
    pub async fn fetch(&self, endpoint: Endpoint<'_>) -> Result<Value, CricbuzzError> {
        let url = self.url_for(&endpoint);

        tracing::debug!("Fetching {} from: {}", endpoint.name(), url);

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(API_HOST_HEADER, &self.api_host)
            .send()
            .await
            .map_err(CricbuzzError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Upstream {} answered {} for {}", endpoint.name(), status, url);
        }

        let body = response
            .bytes()
            .await
            .map_err(CricbuzzError::from_transport)?;

        serde_json::from_slice(&body).map_err(|e| {
            CricbuzzError::InvalidResponse(format!(
                "{} returned a non-JSON body (status {}): {}",
                endpoint.name(),
                status,
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use serde_json::json;

    fn client_for(url: String) -> CricbuzzClient {
        CricbuzzClient::new(
            url,
            "test_key".to_string(),
            "test.host".to_string(),
            Duration::from_secs(5),
        )
        .expect("client")
    }

    #[test]
    fn test_client_creation_trims_base_url() {
        let client = client_for("https://cricket.test/".to_string());

        assert_eq!(client.base_url(), "https://cricket.test");
        assert_eq!(client.api_key, "test_key");
        assert_eq!(
            client.url_for(&Endpoint::Commentary("7")),
            "https://cricket.test/mcenter/v1/7/comm"
        );
    }

    #[tokio::test]
    async fn test_fetch_sends_auth_headers() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/matches/v1/live")
            .match_header(API_KEY_HEADER, "test_key")
            .match_header(API_HOST_HEADER, "test.host")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"typeMatches":[]}"#)
            .create_async()
            .await;

        let value = client_for(server.url()).fetch(Endpoint::Live).await.expect("fetch");

        assert_eq!(value, json!({"typeMatches": []}));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_status_with_json_body_is_passed_through() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/mcenter/v1/42")
            .with_status(403)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"You are not subscribed to this API."}"#)
            .create_async()
            .await;

        let value = client_for(server.url())
            .fetch(Endpoint::MatchCenter("42"))
            .await
            .expect("fetch");

        assert_eq!(value["message"], "You are not subscribed to this API.");
    }

    #[tokio::test]
    async fn test_non_json_body_is_invalid_response() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/matches/v1/recent")
            .with_status(502)
            .with_body("<html>Bad Gateway</html>")
            .create_async()
            .await;

        let err = client_for(server.url())
            .fetch(Endpoint::Recent)
            .await
            .unwrap_err();

        assert!(matches!(err, CricbuzzError::InvalidResponse(_)));
        assert!(err.to_string().contains("recent"));
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_request_error() {
        let err = client_for("http://127.0.0.1:1".to_string())
            .fetch(Endpoint::Upcoming)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CricbuzzError::RequestError(_) | CricbuzzError::Timeout(_)
        ));
    }
}
