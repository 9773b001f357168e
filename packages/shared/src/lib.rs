//! Shared utilities for Lobby.
//!
//! Logging setup and JST time helpers used by the server binary and its tests.

pub mod logger;
pub mod time;
