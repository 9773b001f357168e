//! Infrastructure layer.
//!
//! Concrete implementations of the domain ports plus the wire encoders and
//! the static file handler.

pub mod dto;
pub mod outbox;
pub mod repository;
pub mod static_files;
