//! Single-room WebSocket chat server library.
//!
//! Tracks which connections are in the lobby and under which name, and fans
//! chat and presence updates out to every connected client.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub mod config;
pub mod error;

pub use config::{ServerArgs, ServerConfig};
pub use error::ServerError;
pub use ui::{run, serve};
