//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        State,
        ws::{WebSocketUpgrade, rejection::WebSocketUpgradeRejection},
    },
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use lobby_shared::time::timestamp_to_jst_rfc3339;

use super::websocket::upgrade_chat;
use crate::{
    infrastructure::{
        dto::http::{HealthDto, ParticipantDto},
        static_files::StaticResponse,
    },
    ui::state::AppState,
};

/// Health check endpoint
pub async fn health_check() -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_string(),
    })
}

/// Current participants in join order (for diagnostics)
pub async fn list_participants(State(state): State<Arc<AppState>>) -> Json<Vec<ParticipantDto>> {
    let participants = state
        .registry
        .participants()
        .await
        .into_iter()
        .map(|p| ParticipantDto {
            name: p.name.into_string(),
            connected_at: timestamp_to_jst_rfc3339(p.connected_at.value()),
        })
        .collect();

    Json(participants)
}

/// Fallback for every request not routed elsewhere.
///
/// Upgrade requests are validated against the chat policy (and rejected, since
/// only the chat route accepts them). Everything else is a static resource.
pub async fn resource_handler(
    State(state): State<Arc<AppState>>,
    upgrade: Result<WebSocketUpgrade, WebSocketUpgradeRejection>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    if let Ok(ws) = upgrade {
        return upgrade_chat(ws, state, uri.path(), &headers);
    }

    serve_static(&state, &method, uri.path()).await
}

/// Answer a plain HTTP request from the document root.
pub(super) async fn serve_static(state: &AppState, method: &Method, path: &str) -> Response {
    match state.static_files.handle(method, path).await {
        Ok(StaticResponse::File(resource)) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, resource.content_type)],
            resource.body,
        )
            .into_response(),
        Ok(StaticResponse::Empty) => StatusCode::OK.into_response(),
        Err(e) => {
            tracing::info!("{} {}: {}", method, path, e);
            e.into_response()
        }
    }
}
