//! Data transfer objects for the WebSocket wire format and the HTTP API.

pub mod http;
pub mod websocket;
