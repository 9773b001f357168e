//! Domain layer for the chat lobby.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod command;
pub mod entity;
pub mod error;
pub mod escape;
pub mod factory;
pub mod notice;
pub mod policy;
pub mod pusher;
pub mod repository;
pub mod value_object;

pub use command::Command;
pub use entity::{Participant, Roster};
pub use error::{HandshakeRejection, PushError, ValueObjectError};
pub use escape::MarkupPolicy;
pub use factory::ConnectionIdFactory;
pub use policy::{ChatPolicy, OriginPolicy};
pub use pusher::MessagePusher;
pub use repository::ConnectionRegistry;
pub use value_object::{ConnectionId, DisplayName, Timestamp, WireText};
