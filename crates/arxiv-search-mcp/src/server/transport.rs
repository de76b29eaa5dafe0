//! HTTP transport.
//!
//! `POST /mcp` takes one JSON-RPC message per request; notifications are
//! acknowledged with `202 Accepted` and no body.

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::protocol::{McpHandler, SERVER_NAME};

/// Create the HTTP router for MCP.
pub fn create_router(handler: Arc<McpHandler>) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/health", get(health_check))
        .route("/mcp", post(handle_mcp_post))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(handler)
}

async fn health_check(State(handler): State<Arc<McpHandler>>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": SERVER_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "tools": handler.tool_count()
    }))
}

async fn handle_mcp_post(State(handler): State<Arc<McpHandler>>, body: Bytes) -> Response {
    match handler.handle_message(&body).await {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}
