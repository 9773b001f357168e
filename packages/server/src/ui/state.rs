//! Server state and connection management.

use std::sync::Arc;

use crate::{
    config::ServerConfig,
    domain::{ChatPolicy, ConnectionRegistry},
    infrastructure::{
        outbox::ClientOutboxes,
        repository::InMemoryConnectionRegistry,
        static_files::{MimeTable, StaticRequestHandler},
    },
    usecase::{
        BroadcastCoordinator, ConnectParticipantUseCase, DisconnectParticipantUseCase,
        HandleMessageUseCase,
    },
};

/// Shared application state
pub struct AppState {
    /// Repository（データアクセス層の抽象化）
    pub registry: Arc<dyn ConnectionRegistry>,
    /// WebSocket sender channels, keyed by connection
    pub outboxes: Arc<ClientOutboxes>,
    pub broadcaster: BroadcastCoordinator,
    pub policy: ChatPolicy,
    pub static_files: StaticRequestHandler,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        let registry: Arc<dyn ConnectionRegistry> = Arc::new(InMemoryConnectionRegistry::new());
        let outboxes = Arc::new(ClientOutboxes::new());
        let broadcaster = BroadcastCoordinator::new(registry.clone(), outboxes.clone());
        let mime = Arc::new(MimeTable::standard());

        Self {
            registry,
            outboxes,
            broadcaster,
            policy: config.chat_policy(),
            static_files: StaticRequestHandler::new(
                config.document_root.clone(),
                config.index_file.clone(),
                mime,
            ),
        }
    }

    pub fn connect_usecase(&self) -> ConnectParticipantUseCase {
        ConnectParticipantUseCase::new(self.registry.clone(), self.broadcaster.clone())
    }

    pub fn disconnect_usecase(&self) -> DisconnectParticipantUseCase {
        DisconnectParticipantUseCase::new(self.registry.clone(), self.broadcaster.clone())
    }

    pub fn message_usecase(&self) -> HandleMessageUseCase {
        HandleMessageUseCase::new(
            self.registry.clone(),
            self.broadcaster.clone(),
            self.policy.help_markup,
        )
    }
}
