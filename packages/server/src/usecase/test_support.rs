//! UseCase テスト用のヘルパー

use std::sync::Arc;

use tokio::sync::mpsc;

use super::BroadcastCoordinator;
use crate::{
    domain::{ConnectionId, ConnectionIdFactory, ConnectionRegistry, DisplayName},
    infrastructure::{outbox::ClientOutboxes, repository::InMemoryConnectionRegistry},
};

/// インメモリのレジストリと送信キューを組み合わせたテスト環境
pub struct TestLobby {
    pub registry: Arc<InMemoryConnectionRegistry>,
    pub outboxes: Arc<ClientOutboxes>,
    pub broadcaster: BroadcastCoordinator,
}

impl TestLobby {
    pub fn new() -> Self {
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let outboxes = Arc::new(ClientOutboxes::new());
        let broadcaster = BroadcastCoordinator::new(registry.clone(), outboxes.clone());
        Self {
            registry,
            outboxes,
            broadcaster,
        }
    }

    /// 送信キューだけを接続し、レジストリには登録しない
    pub async fn attach(&self) -> TestClient {
        let id = ConnectionIdFactory::generate();
        let (tx, rx) = mpsc::unbounded_channel();
        self.outboxes.attach(id, tx).await;
        TestClient { id, rx }
    }

    /// 送信キューを接続し、レジストリにも登録する
    pub async fn register(&self) -> TestClient {
        let client = self.attach().await;
        self.registry.add(client.id).await;
        client
    }
}

/// 1 つの接続が受け取ったペイロードを読み出すためのハンドル
pub struct TestClient {
    pub id: ConnectionId,
    rx: mpsc::UnboundedReceiver<String>,
}

impl TestClient {
    /// キューに溜まっているペイロードをそのまま取り出す
    pub fn raw(&mut self) -> Vec<String> {
        let mut out = Vec::new();
        while let Ok(payload) = self.rx.try_recv() {
            out.push(payload);
        }
        out
    }

    /// キューに溜まっているペイロードを JSON として取り出す
    pub fn messages(&mut self) -> Vec<serde_json::Value> {
        self.raw()
            .iter()
            .map(|payload| serde_json::from_str(payload).unwrap())
            .collect()
    }

    pub fn default_name(&self) -> String {
        DisplayName::default_for(&self.id).into_string()
    }
}
