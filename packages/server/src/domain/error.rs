//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// Alias validation error
    #[error("Alias cannot be empty")]
    AliasEmpty,

    /// Alias too long error
    #[error("Alias cannot exceed {max} characters (got {actual})")]
    AliasTooLong { max: usize, actual: usize },
}

/// Reasons a WebSocket handshake is refused before the connection opens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandshakeRejection {
    /// The upgrade targeted a resource other than the chat endpoint
    #[error("Request for unknown resource {0}")]
    UnknownResource(String),

    /// The origin header did not match the configured origin
    #[error("Request from unrecognized origin: {0}")]
    ForbiddenOrigin(String),
}

/// Errors raised while delivering a payload to one connection
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PushError {
    /// No outbound channel is registered for the connection
    #[error("No outbound channel for connection {0}")]
    ConnectionNotFound(String),

    /// The connection's send task has already shut down
    #[error("Outbound channel for connection {0} is closed")]
    ChannelClosed(String),
}
