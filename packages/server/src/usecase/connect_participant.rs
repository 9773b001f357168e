//! UseCase: 参加者接続処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ConnectParticipantUseCase::execute() メソッド
//! - 接続時の登録、参加者一覧・歓迎メッセージ・入室通知の配信
//!
//! ### なぜこのテストが必要か
//! - 参加者一覧の配信が入室通知より先に届くことを保証
//! - 歓迎メッセージが新しい接続にだけ届くことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規接続
//! - 異常系：同じ接続の二重登録
//! - 並行性：多数の同時接続

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRegistry, DisplayName, notice};

use super::{broadcast::BroadcastCoordinator, error::ConnectError};

/// 参加者接続のユースケース
pub struct ConnectParticipantUseCase {
    /// Repository（データアクセス層の抽象化）
    registry: Arc<dyn ConnectionRegistry>,
    broadcaster: BroadcastCoordinator,
}

impl ConnectParticipantUseCase {
    /// 新しい ConnectParticipantUseCase を作成
    pub fn new(registry: Arc<dyn ConnectionRegistry>, broadcaster: BroadcastCoordinator) -> Self {
        Self {
            registry,
            broadcaster,
        }
    }

    /// 参加者接続を実行
    ///
    /// # Arguments
    ///
    /// * `id` - 接続した WebSocket の ID
    ///
    /// # Returns
    ///
    /// * `Ok(DisplayName)` - 割り当てたデフォルト名
    /// * `Err(ConnectError)` - 既に登録済み
    pub async fn execute(&self, id: ConnectionId) -> Result<DisplayName, ConnectError> {
        // 1. デフォルト名で登録（配信が終わるまで他の変更を待たせる）
        let _turn = self.broadcaster.turn().await;
        let name = self
            .registry
            .add(id)
            .await
            .ok_or_else(|| ConnectError::AlreadyConnected(id.to_string()))?;
        tracing::info!("Connection {} joined the lobby as '{}'", id, name);

        // 2. 参加者一覧 → 歓迎メッセージ（本人のみ） → 入室通知 の順に配信
        self.broadcaster.broadcast_roster().await;
        self.broadcaster
            .unicast_system(&id, &notice::welcome())
            .await;
        self.broadcaster
            .broadcast_system(&notice::joined(&name))
            .await;

        Ok(name)
    }
}
