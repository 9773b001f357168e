//! Outbound delivery port.

use async_trait::async_trait;

use super::{ConnectionId, error::PushError};

/// Hands an encoded payload to one connection's outbound queue.
///
/// Delivery is fire-and-forget: `Ok` means the payload was queued, not that
/// the client received it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    async fn push(&self, id: &ConnectionId, payload: &str) -> Result<(), PushError>;
}
