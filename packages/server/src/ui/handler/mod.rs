//! Handler modules for HTTP and WebSocket endpoints.

mod error;
pub mod http;
pub mod websocket;

// Re-export HTTP handlers
pub use http::{health_check, list_participants, resource_handler};

// Re-export WebSocket handlers
pub use websocket::websocket_handler;
