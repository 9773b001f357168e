//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade, rejection::WebSocketUpgradeRejection},
    },
    http::{HeaderMap, Method, Uri, header},
    response::{IntoResponse, Response},
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use super::http::serve_static;
use crate::{
    domain::{ConnectionId, ConnectionIdFactory},
    ui::state::AppState,
};

/// Chat path entry point.
///
/// Upgrade requests become chat sessions; any other request on the chat path
/// is answered like every other static resource.
pub async fn websocket_handler(
    State(state): State<Arc<AppState>>,
    upgrade: Result<WebSocketUpgrade, WebSocketUpgradeRejection>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    match upgrade {
        Ok(ws) => upgrade_chat(ws, state, uri.path(), &headers),
        Err(rejection) => {
            tracing::debug!("{} {} is not an upgrade: {}", method, uri.path(), rejection);
            serve_static(&state, &method, uri.path()).await
        }
    }
}

/// Validate the handshake and, if accepted, hand the socket to a session.
pub(super) fn upgrade_chat(
    ws: WebSocketUpgrade,
    state: Arc<AppState>,
    path: &str,
    headers: &HeaderMap,
) -> Response {
    let origin = headers
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok());

    if let Err(rejection) = state.policy.validate_handshake(path, origin) {
        tracing::warn!("Rejecting WebSocket handshake: {}", rejection);
        return rejection.into_response();
    }

    let id = ConnectionIdFactory::generate();
    tracing::debug!("Accepting WebSocket handshake for {}", id);
    ws.on_upgrade(move |socket| handle_socket(socket, state, id))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, id: ConnectionId) {
    // Create a channel for this connection to receive payloads
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    state.outboxes.attach(id, tx).await;

    if let Err(e) = state.connect_usecase().execute(id).await {
        tracing::error!("Failed to register connection {}: {}", id, e);
        state.outboxes.detach(&id).await;
        return;
    }

    let (mut sender, mut receiver) = socket.split();

    // Spawn a task to receive messages from this connection
    let message_usecase = state.message_usecase();
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on {}: {}", id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    let outcome = message_usecase.execute(&id, text.as_str()).await;
                    tracing::debug!("Message from {} handled: {:?}", id, outcome);
                }
                Message::Binary(bytes) => {
                    tracing::debug!("Ignoring {} byte binary frame from {}", bytes.len(), id);
                }
                Message::Close(_) => {
                    tracing::info!("Connection {} requested close", id);
                    break;
                }
                // Ping/pong is handled by the WebSocket protocol
                Message::Ping(_) | Message::Pong(_) => {}
            }
        }
    });

    // Spawn a task to forward queued payloads to this connection
    let mut send_task = tokio::spawn(async move {
        while let Some(payload) = rx.recv().await {
            if sender.send(Message::Text(payload.into())).await.is_err() {
                break;
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    let disconnect_usecase = state.disconnect_usecase();
    disconnect_usecase.execute(&id).await;
    state.outboxes.detach(&id).await;
    tracing::info!(
        "Session {} closed; {} participant(s) remain",
        id,
        disconnect_usecase.count_remaining_participants().await
    );
}
