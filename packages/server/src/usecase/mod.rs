//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod broadcast;
pub mod connect_participant;
pub mod disconnect_participant;
pub mod error;
pub mod handle_message;

#[cfg(test)]
pub(crate) mod test_support;

pub use broadcast::BroadcastCoordinator;
pub use connect_participant::ConnectParticipantUseCase;
pub use disconnect_participant::DisconnectParticipantUseCase;
pub use error::ConnectError;
pub use handle_message::{HandleMessageUseCase, MessageOutcome};
