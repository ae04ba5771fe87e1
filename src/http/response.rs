//! Mapping engine results to inbound responses.
//!
//! Accepted engine replies are returned with the engine's status code and
//! JSON body unmodified. Failures are returned as `{"detail": "..."}`:
//! - unreachable engine → 503 with a fixed message
//! - unexpected engine status → that status, engine body as detail
//! - local failure (timeout, bad JSON) → 500 with its description
//! - server ID that cannot be forwarded → 400

use axum::{
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::upstream::{UpstreamError, UpstreamReply};

/// Error body returned to inbound callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for UpstreamReply {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
            self.body,
        )
            .into_response()
    }
}

impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.detail(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
