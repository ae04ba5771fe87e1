pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use crate::http::server::AppState;
use self::handlers::*;

pub fn setup_admin_router(state: AppState) -> Router {
    Router::new()
        .route("/api/mcp/status", get(get_mcp_status))
        .route("/api/mcp/servers/{server_id}/test", post(test_mcp_server))
        .with_state(state)
}
