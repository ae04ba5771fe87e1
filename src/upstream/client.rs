//! AI engine HTTP client.
//!
//! # Responsibilities
//! - Forward status queries and server tests to the engine
//! - Enforce a per-call timeout (status and test calls differ)
//! - Classify failures into [`UpstreamError`]
//!
//! One pooled `reqwest::Client` is shared by all requests for the life of
//! the process. Each call owns only its response, which is dropped on
//! every exit path. There are no retries: one attempt, and any failure is
//! returned to the caller immediately.

use axum::body::Bytes;
use axum::http::StatusCode;
use reqwest::RequestBuilder;
use serde::de::IgnoredAny;
use std::time::{Duration, Instant};

use crate::config::AiEngineConfig;
use crate::http::request::X_REQUEST_ID;
use crate::observability::metrics;
use crate::upstream::base_url::{derive_base_url, BaseUrl};
use crate::upstream::error::{ClientBuildError, UpstreamError};

/// Engine operations, used for logging and metric labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Status,
    TestServer,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Status => "status",
            Operation::TestServer => "test_server",
        }
    }

    /// Engine statuses whose body is a valid answer for this operation.
    ///
    /// A server test reports "test failed" as HTTP 500 with a JSON body,
    /// so 500 is an answer there rather than an error.
    pub fn accepts(self, status: StatusCode) -> bool {
        match self {
            Operation::Status => status == StatusCode::OK,
            Operation::TestServer => {
                status == StatusCode::OK || status == StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// An accepted engine answer: its status code and JSON body, unmodified.
///
/// The body is checked to be JSON but kept as the engine's bytes, so
/// number precision, key order and formatting survive the trip.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Client for the AI engine's MCP management endpoints.
#[derive(Debug, Clone)]
pub struct AiEngineClient {
    http: reqwest::Client,
    base: BaseUrl,
    status_timeout: Duration,
    test_timeout: Duration,
}

impl AiEngineClient {
    /// Build the client from configuration. Called once at startup.
    pub fn new(config: &AiEngineConfig) -> Result<Self, ClientBuildError> {
        let base = derive_base_url(&config.health_check_url)?;
        // The engine is an internal service; never route it through a system proxy.
        // Redirects are answers to pass back, not to follow.
        let http = reqwest::Client::builder()
            .user_agent(concat!("mcp-status-proxy/", env!("CARGO_PKG_VERSION")))
            .no_proxy()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        tracing::info!(base_url = %base, "AI engine client initialized");

        Ok(Self {
            http,
            base,
            status_timeout: Duration::from_secs(config.status_timeout_secs),
            test_timeout: Duration::from_secs(config.test_timeout_secs),
        })
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base
    }

    /// `GET {base}/mcp/status`.
    pub async fn status(&self, request_id: Option<&str>) -> Result<UpstreamReply, UpstreamError> {
        let url = self
            .base
            .endpoint(&["mcp", "status"])
            .map_err(|e| UpstreamError::Request(e.to_string()))?;
        self.send(Operation::Status, self.http.get(url), self.status_timeout, request_id)
            .await
    }

    /// `POST {base}/mcp/test/{server_id}`.
    ///
    /// The id is passed through as is; only `.` and `..`, which no URL can
    /// carry as a segment, are refused without calling the engine.
    pub async fn test_server(
        &self,
        server_id: &str,
        request_id: Option<&str>,
    ) -> Result<UpstreamReply, UpstreamError> {
        let url = match self.base.endpoint(&["mcp", "test", server_id]) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!(server_id = %server_id, error = %e, "Refusing server test");
                return Err(UpstreamError::InvalidServerId(server_id.to_string()));
            }
        };
        self.send(Operation::TestServer, self.http.post(url), self.test_timeout, request_id)
            .await
    }

    async fn send(
        &self,
        operation: Operation,
        request: RequestBuilder,
        timeout: Duration,
        request_id: Option<&str>,
    ) -> Result<UpstreamReply, UpstreamError> {
        let start_time = Instant::now();
        let result = Self::execute(operation, request, timeout, request_id).await;

        let status = match &result {
            Ok(reply) => reply.status,
            Err(e) => e.status_code(),
        };
        metrics::record_upstream(operation.as_str(), status.as_u16(), start_time);

        match &result {
            Ok(reply) => {
                tracing::debug!(
                    operation = operation.as_str(),
                    status = %reply.status,
                    elapsed_ms = start_time.elapsed().as_millis() as u64,
                    "AI engine answered"
                );
            }
            Err(UpstreamError::Unreachable(e)) => {
                tracing::warn!(operation = operation.as_str(), error = %e, "AI engine unreachable");
            }
            Err(UpstreamError::Status { status, .. }) => {
                tracing::warn!(operation = operation.as_str(), status = %status, "AI engine returned error status");
            }
            Err(e) => {
                tracing::error!(operation = operation.as_str(), error = %e, "AI engine call failed");
            }
        }

        result
    }

    async fn execute(
        operation: Operation,
        request: RequestBuilder,
        timeout: Duration,
        request_id: Option<&str>,
    ) -> Result<UpstreamReply, UpstreamError> {
        let mut request = request.timeout(timeout);
        if let Some(id) = request_id {
            request = request.header(X_REQUEST_ID, id);
        }

        let response = request
            .send()
            .await
            .map_err(|e| UpstreamError::from_transport(e, timeout))?;

        let status = response.status();
        if !operation.accepts(status) {
            let body = response
                .text()
                .await
                .map_err(|e| UpstreamError::from_transport(e, timeout))?;
            return Err(UpstreamError::Status { status, body });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::from_transport(e, timeout))?;
        serde_json::from_slice::<IgnoredAny>(&bytes)
            .map_err(|e| UpstreamError::Decode(e.to_string()))?;

        Ok(UpstreamReply { status, body: bytes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accepts_only_ok() {
        assert!(Operation::Status.accepts(StatusCode::OK));
        assert!(!Operation::Status.accepts(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(!Operation::Status.accepts(StatusCode::CREATED));
    }

    #[test]
    fn test_server_test_accepts_ok_and_500() {
        assert!(Operation::TestServer.accepts(StatusCode::OK));
        assert!(Operation::TestServer.accepts(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(!Operation::TestServer.accepts(StatusCode::NOT_FOUND));
        assert!(!Operation::TestServer.accepts(StatusCode::BAD_GATEWAY));
    }

    #[test]
    fn test_client_uses_configured_timeouts() {
        let config = AiEngineConfig {
            health_check_url: "http://ai-engine:15000/health".into(),
            status_timeout_secs: 2,
            test_timeout_secs: 9,
        };
        let client = AiEngineClient::new(&config).unwrap();
        assert_eq!(client.base_url().as_str(), "http://ai-engine:15000");
        assert_eq!(client.status_timeout, Duration::from_secs(2));
        assert_eq!(client.test_timeout, Duration::from_secs(9));
    }

    #[test]
    fn test_client_rejects_bad_url() {
        let config = AiEngineConfig {
            health_check_url: "::::".into(),
            ..AiEngineConfig::default()
        };
        assert!(matches!(
            AiEngineClient::new(&config),
            Err(ClientBuildError::BaseUrl(_))
        ));
    }
}
