//! UseCase: 参加者切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectParticipantUseCase::execute() メソッド
//! - 切断時の削除、参加者一覧・退室通知の配信
//!
//! ### なぜこのテストが必要か
//! - 切断通知が 2 回届いても（ソフトクローズ → ハードクローズ）退室通知は 1 回だけ
//! - 退室通知には削除時点の名前が使われることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：参加者の切断と通知
//! - エッジケース：同じ接続の二重切断、未登録の接続の切断

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRegistry, DisplayName, notice};

use super::broadcast::BroadcastCoordinator;

/// 参加者切断のユースケース
pub struct DisconnectParticipantUseCase {
    /// Repository（データアクセス層の抽象化）
    registry: Arc<dyn ConnectionRegistry>,
    broadcaster: BroadcastCoordinator,
}

impl DisconnectParticipantUseCase {
    /// 新しい DisconnectParticipantUseCase を作成
    pub fn new(registry: Arc<dyn ConnectionRegistry>, broadcaster: BroadcastCoordinator) -> Self {
        Self {
            registry,
            broadcaster,
        }
    }

    /// 参加者切断を実行
    ///
    /// # Arguments
    ///
    /// * `id` - 切断した WebSocket の ID
    ///
    /// # Returns
    ///
    /// * `Some(DisplayName)` - 削除した参加者の名前
    /// * `None` - 既に切断済み（エラーではない）
    pub async fn execute(&self, id: &ConnectionId) -> Option<DisplayName> {
        // 1. 削除（既に削除済みなら何もしない）
        let _turn = self.broadcaster.turn().await;
        let Some(name) = self.registry.remove(id).await else {
            tracing::debug!("Connection {} already left; ignoring close", id);
            return None;
        };
        tracing::info!("Connection {} ('{}') left the lobby", id, name);

        // 2. 参加者一覧 → 退室通知 の順に配信
        self.broadcaster.broadcast_roster().await;
        self.broadcaster
            .broadcast_system(&notice::left(&name))
            .await;

        Some(name)
    }

    /// 残りの参加者数を取得
    pub async fn count_remaining_participants(&self) -> usize {
        self.registry.count().await
    }
}
