use axum::{
    extract::{Path, State},
    http::HeaderMap,
};

use crate::http::request::request_id;
use crate::http::server::AppState;
use crate::upstream::{UpstreamError, UpstreamReply};

/// `GET /api/mcp/status`: the engine's MCP status, passed through.
pub async fn get_mcp_status(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<UpstreamReply, UpstreamError> {
    state.engine.status(request_id(&headers)).await
}

/// `POST /api/mcp/servers/{server_id}/test`: run an engine-side test of
/// one MCP server. A 500 from the engine is a failed test and is returned
/// with its body.
pub async fn test_mcp_server(
    State(state): State<AppState>,
    Path(server_id): Path<String>,
    headers: HeaderMap,
) -> Result<UpstreamReply, UpstreamError> {
    tracing::debug!(server_id = %server_id, "Testing MCP server");
    state
        .engine
        .test_server(&server_id, request_id(&headers))
        .await
}
