//! Route table.

use std::sync::Arc;

use axum::{
    Router,
    routing::{any, get},
};
use tower_http::trace::TraceLayer;

use super::{
    handler::{health_check, list_participants, resource_handler, websocket_handler},
    state::AppState,
};

/// Build the application router.
///
/// The chat path upgrades WebSocket handshakes and answers any other request
/// from the document root. Everything not routed explicitly falls through to
/// [`resource_handler`].
pub fn build_router(state: Arc<AppState>) -> Router {
    let chat_path = state.policy.chat_path.clone();
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/participants", get(list_participants))
        .route(&chat_path, any(websocket_handler))
        .fallback(resource_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
