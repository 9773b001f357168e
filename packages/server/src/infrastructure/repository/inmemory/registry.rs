//! InMemory Connection Registry 実装
//!
//! ドメイン層が定義する ConnectionRegistry trait の具体的な実装。
//! `Roster` ドメインモデルを 1 つの Mutex で保護し、インメモリ DB として使用します。
//!
//! 追加・削除・リネーム・スナップショットはすべて同じロックを取得するため、
//! スナップショットは必ずある瞬間に実在した状態を表します。

use async_trait::async_trait;
use lobby_shared::time::get_jst_timestamp;
use tokio::sync::Mutex;

use crate::domain::{
    ConnectionId, ConnectionRegistry, DisplayName, Participant, Roster, Timestamp,
};

/// インメモリ Connection Registry 実装
#[derive(Default)]
pub struct InMemoryConnectionRegistry {
    /// Roster ドメインモデル
    roster: Mutex<Roster>,
}

impl InMemoryConnectionRegistry {
    /// 新しい InMemoryConnectionRegistry を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConnectionRegistry for InMemoryConnectionRegistry {
    async fn add(&self, id: ConnectionId) -> Option<DisplayName> {
        let name = DisplayName::default_for(&id);
        let participant =
            Participant::new(id, name.clone(), Timestamp::new(get_jst_timestamp()));

        let mut roster = self.roster.lock().await;
        if !roster.add(participant) {
            tracing::warn!("Connection {} is already registered", id);
            return None;
        }
        Some(name)
    }

    async fn remove(&self, id: &ConnectionId) -> Option<DisplayName> {
        let mut roster = self.roster.lock().await;
        let removed = roster.remove(id);
        if removed.is_none() {
            tracing::debug!("Connection {} was already removed", id);
        }
        removed.map(|p| p.name)
    }

    async fn rename(&self, id: &ConnectionId, name: DisplayName) -> Option<DisplayName> {
        let mut roster = self.roster.lock().await;
        let previous = roster.rename(id, name);
        if previous.is_none() {
            tracing::debug!("Rename skipped: connection {} is not registered", id);
        }
        previous
    }

    async fn lookup(&self, id: &ConnectionId) -> DisplayName {
        let roster = self.roster.lock().await;
        roster
            .get(id)
            .map(|p| p.name.clone())
            .unwrap_or_else(DisplayName::unknown)
    }

    async fn snapshot(&self) -> Vec<DisplayName> {
        let roster = self.roster.lock().await;
        roster.names()
    }

    async fn connection_ids(&self) -> Vec<ConnectionId> {
        let roster = self.roster.lock().await;
        roster.ids()
    }

    async fn participants(&self) -> Vec<Participant> {
        let roster = self.roster.lock().await;
        roster.participants().to_vec()
    }

    async fn count(&self) -> usize {
        let roster = self.roster.lock().await;
        roster.len()
    }
}
