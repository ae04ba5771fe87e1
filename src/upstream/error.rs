//! Upstream failure taxonomy.

use axum::http::StatusCode;
use std::time::Duration;
use thiserror::Error;

use crate::upstream::base_url::BaseUrlError;

/// Fixed detail returned when the engine cannot be reached.
pub const UNREACHABLE_DETAIL: &str = "AI Engine is not reachable";

/// Why a call to the AI engine did not produce an acceptable reply.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The connection to the engine could not be established.
    #[error("AI Engine is not reachable")]
    Unreachable(#[source] reqwest::Error),

    /// The engine answered with a status the operation does not accept.
    /// `body` is the engine's raw response text.
    #[error("AI Engine returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// No complete response arrived within the per-call timeout. This
    /// includes a connect attempt that hangs rather than being refused.
    #[error("AI Engine did not respond within {}s", .0.as_secs())]
    Timeout(Duration),

    /// The response body was not valid JSON.
    #[error("Invalid JSON from AI Engine: {0}")]
    Decode(String),

    /// Any other transport failure after the connection was made.
    #[error("AI Engine request failed: {0}")]
    Request(String),

    /// The server ID cannot be carried as a single path segment.
    #[error("Invalid server id '{0}'")]
    InvalidServerId(String),
}

impl UpstreamError {
    /// Classify a transport-level error from the HTTP client.
    pub fn from_transport(error: reqwest::Error, timeout: Duration) -> Self {
        if error.is_connect() {
            Self::Unreachable(error)
        } else if error.is_timeout() {
            Self::Timeout(timeout)
        } else if error.is_decode() {
            Self::Decode(error.to_string())
        } else {
            Self::Request(error.to_string())
        }
    }

    /// Status code reported to the inbound caller.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unreachable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Status { status, .. } => *status,
            Self::InvalidServerId(_) => StatusCode::BAD_REQUEST,
            Self::Timeout(_) | Self::Decode(_) | Self::Request(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Human-readable detail reported to the inbound caller.
    ///
    /// Upstream status errors pass the engine's body through untouched.
    pub fn detail(&self) -> String {
        match self {
            Self::Status { body, .. } => body.clone(),
            Self::Unreachable(_) => UNREACHABLE_DETAIL.to_string(),
            other => other.to_string(),
        }
    }
}

/// Failure to construct the upstream client at startup.
#[derive(Debug, Error)]
pub enum ClientBuildError {
    #[error("invalid AI engine URL: {0}")]
    BaseUrl(#[from] BaseUrlError),

    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}
