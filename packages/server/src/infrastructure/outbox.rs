//! Per-connection outbound channels.
//!
//! Each WebSocket session owns a send task draining an unbounded channel.
//! This map holds the sending halves so the core can queue payloads without
//! touching the socket.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc::UnboundedSender};

use crate::domain::{ConnectionId, MessagePusher, PushError};

/// Sending halves of every open connection's outbound channel
#[derive(Default)]
pub struct ClientOutboxes {
    senders: Mutex<HashMap<ConnectionId, UnboundedSender<String>>>,
}

impl ClientOutboxes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a connection's outbound channel.
    pub async fn attach(&self, id: ConnectionId, sender: UnboundedSender<String>) {
        let mut senders = self.senders.lock().await;
        senders.insert(id, sender);
    }

    /// Detach a connection's outbound channel. Detaching twice is harmless.
    pub async fn detach(&self, id: &ConnectionId) {
        let mut senders = self.senders.lock().await;
        senders.remove(id);
    }

    pub async fn is_empty(&self) -> bool {
        self.senders.lock().await.is_empty()
    }
}

#[async_trait]
impl MessagePusher for ClientOutboxes {
    async fn push(&self, id: &ConnectionId, payload: &str) -> Result<(), PushError> {
        let senders = self.senders.lock().await;
        let sender = senders
            .get(id)
            .ok_or_else(|| PushError::ConnectionNotFound(id.to_string()))?;
        // Unbounded send never waits, so holding the lock here is fine
        sender
            .send(payload.to_string())
            .map_err(|_| PushError::ChannelClosed(id.to_string()))
    }
}
