//! API gateway client
//!
//! Stateless, typed request builders for the backend management API.
//! Each operation shapes one HTTP call (method, path, body) and decodes
//! the uniform result envelope; there is no retry or backoff policy and
//! no caching. Transport-level failures propagate to the caller.

pub mod agents;
pub mod error;
pub mod memories;
pub mod plugins;
pub mod semantic;
pub mod types;

pub use error::GatewayError;
pub use types::ResultEnvelope;

use crate::config::Config;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Client for the backend management API
///
/// Holds a shared `reqwest::Client` for connection pooling; cloning is
/// cheap and clones share the pool. Concurrent calls are independent,
/// with no ordering guarantee between them.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    base_url: String,
    legacy_base_url: Option<String>,
}

impl GatewayClient {
    /// Create a client against the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, None)
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &Config) -> Self {
        Self::with_client(
            reqwest::Client::new(),
            config.gateway.base_url.clone(),
            config.gateway.legacy_base_url.clone(),
        )
    }

    /// Create a client with an externally supplied `reqwest::Client`
    pub fn with_client(
        http: reqwest::Client,
        base_url: impl Into<String>,
        legacy_base_url: Option<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            legacy_base_url,
        }
    }

    /// Base URL the client issues requests against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn legacy_url(&self, path: &str) -> Result<String, GatewayError> {
        let base = self
            .legacy_base_url
            .as_deref()
            .ok_or(GatewayError::MissingLegacyBaseUrl)?;
        Ok(format!("{}{}", base, path))
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, GatewayError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(
                status = status.as_u16(),
                body = %body,
                "backend returned error status"
            );
            return Err(GatewayError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<ResultEnvelope<T>, GatewayError> {
        let url = self.url(path);
        tracing::debug!(url = %url, "GET");
        self.execute(self.http.get(&url)).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ResultEnvelope<T>, GatewayError> {
        let url = self.url(path);
        tracing::debug!(url = %url, "POST");
        self.execute(self.http.post(&url).json(body)).await
    }

    pub(crate) async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ResultEnvelope<T>, GatewayError> {
        let url = self.url(path);
        tracing::debug!(url = %url, "PUT");
        self.execute(self.http.put(&url).json(body)).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<ResultEnvelope<T>, GatewayError> {
        let url = self.url(path);
        tracing::debug!(url = %url, "DELETE");
        self.execute(self.http.delete(&url)).await
    }

    pub(crate) async fn get_legacy<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, GatewayError> {
        let url = self.legacy_url(path)?;
        tracing::debug!(url = %url, "GET (legacy)");
        self.execute(self.http.get(&url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn test_non_success_status_is_surfaced() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/chatbi/api/chat/agent/getAgentList")
            .with_status(500)
            .with_body("backend exploded")
            .create_async()
            .await;

        let client = GatewayClient::new(server.url());
        let result = client.list_agents().await;

        mock.assert_async().await;
        match result {
            Err(GatewayError::UnexpectedStatus { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "backend exploded");
            }
            other => panic!("expected UnexpectedStatus, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_undecodable_body_is_a_decode_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/chatbi/api/chat/agent/getAgentList")
            .with_status(200)
            .with_body("this is not JSON")
            .create_async()
            .await;

        let client = GatewayClient::new(server.url());
        let result = client.list_agents().await;

        mock.assert_async().await;
        assert!(matches!(result, Err(GatewayError::Decode(_))));
    }

    #[tokio::test]
    async fn test_legacy_call_requires_base_url() {
        let client = GatewayClient::new("http://localhost:9080");
        let result = client.tool_types().await;
        assert!(matches!(result, Err(GatewayError::MissingLegacyBaseUrl)));
    }
}
