//! ブロードキャスト調整
//!
//! エンコード済みのペイロードを、呼び出し時点でレジストリに登録されている
//! すべての接続へ配信します。配信は接続ごとに独立しており、1 件の失敗が
//! 残りの配信を止めることはありません。再送はしません。
//!
//! 参加者の登録・削除・リネームとそれに伴う配信は [`BroadcastCoordinator::turn`]
//! で直列化します。各接続のキューには、レジストリの変更と同じ順序で
//! 参加者一覧が届きます。

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::{
    domain::{ConnectionId, ConnectionRegistry, MessagePusher, WireText},
    infrastructure::dto::websocket::{encode_roster, encode_system},
};

/// ブロードキャストコーディネーター
#[derive(Clone)]
pub struct BroadcastCoordinator {
    registry: Arc<dyn ConnectionRegistry>,
    pusher: Arc<dyn MessagePusher>,
    /// クローン間で共有する順番待ちのロック
    sequence: Arc<Mutex<()>>,
}

impl BroadcastCoordinator {
    /// 新しい BroadcastCoordinator を作成
    pub fn new(registry: Arc<dyn ConnectionRegistry>, pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            registry,
            pusher,
            sequence: Arc::new(Mutex::new(())),
        }
    }

    /// レジストリの変更と、その結果の配信を 1 つの順番として実行するためのガード
    ///
    /// ガードを保持している間に変更と配信を済ませること。キューへの投入は
    /// 待ちが発生しないので、保持中に他の接続の処理が詰まることはない。
    pub async fn turn(&self) -> MutexGuard<'_, ()> {
        self.sequence.lock().await
    }

    /// 全接続へ配信し、キューに積めた件数を返す
    pub async fn send_to_all(&self, payload: &str) -> usize {
        let targets = self.registry.connection_ids().await;
        let mut delivered = 0;
        for id in &targets {
            match self.pusher.push(id, payload).await {
                Ok(()) => delivered += 1,
                Err(e) => tracing::warn!("Failed to deliver to {}: {}", id, e),
            }
        }
        tracing::debug!("Broadcast delivered to {}/{} connections", delivered, targets.len());
        delivered
    }

    /// 1 つの接続へ配信する（ベストエフォート）
    pub async fn send_to(&self, id: &ConnectionId, payload: &str) -> bool {
        match self.pusher.push(id, payload).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Failed to deliver to {}: {}", id, e);
                false
            }
        }
    }

    /// 現在の参加者一覧を全接続へ配信する
    pub async fn broadcast_roster(&self) -> usize {
        let names = self.registry.snapshot().await;
        match encode_roster(&names) {
            Ok(payload) => self.send_to_all(&payload).await,
            Err(e) => {
                tracing::warn!("Failed to encode roster: {}", e);
                0
            }
        }
    }

    /// サーバーからのメッセージを全接続へ配信する
    pub async fn broadcast_system(&self, text: &WireText) -> usize {
        match encode_system(text) {
            Ok(payload) => self.send_to_all(&payload).await,
            Err(e) => {
                tracing::warn!("Failed to encode system message: {}", e);
                0
            }
        }
    }

    /// サーバーからのメッセージを 1 つの接続へ配信する
    pub async fn unicast_system(&self, id: &ConnectionId, text: &WireText) -> bool {
        match encode_system(text) {
            Ok(payload) => self.send_to(id, &payload).await,
            Err(e) => {
                tracing::warn!("Failed to encode system message: {}", e);
                false
            }
        }
    }
}
