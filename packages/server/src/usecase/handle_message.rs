//! UseCase: 受信メッセージ処理（コマンドインタープリター）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - HandleMessageUseCase::execute() メソッド
//! - `/help`、`/alias`、未知のコマンド、通常のチャットの振り分け
//!
//! ### なぜこのテストが必要か
//! - エラー応答は送信者にだけ届き、他の参加者には配信されないことを保証
//! - リネーム時は参加者一覧の配信が通知より先に届くことを確認
//! - チャット本文のエスケープが正しく行われることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：チャット送信、リネーム、ヘルプ
//! - 異常系：引数なしの `/alias`、長すぎるエイリアス、未知のコマンド
//! - エッジケース：切断と競合したリネーム、空のペイロード

use std::sync::Arc;

use crate::{
    domain::{
        Command, ConnectionId, ConnectionRegistry, DisplayName, MarkupPolicy, notice,
    },
    infrastructure::dto::websocket::encode_chat,
};

use super::broadcast::BroadcastCoordinator;

/// 1 件のテキストペイロードを処理した結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageOutcome {
    /// ヘルプを送信者に返した
    Help,
    /// 表示名を変更し、全員に通知した
    Renamed { old: DisplayName, new: DisplayName },
    /// エイリアスが不正だったため送信者にエラーを返した
    AliasRejected,
    /// 未知のコマンドだったため送信者にエラーを返した
    UnknownCommand,
    /// チャットを配信した（配信件数）
    Chat { delivered: usize },
    /// 何もしなかった
    Ignored,
}

/// 受信メッセージ処理のユースケース
pub struct HandleMessageUseCase {
    /// Repository（データアクセス層の抽象化）
    registry: Arc<dyn ConnectionRegistry>,
    broadcaster: BroadcastCoordinator,
    /// `/help` の本文に対するマークアップの扱い
    help_markup: MarkupPolicy,
}

impl HandleMessageUseCase {
    /// 新しい HandleMessageUseCase を作成
    pub fn new(
        registry: Arc<dyn ConnectionRegistry>,
        broadcaster: BroadcastCoordinator,
        help_markup: MarkupPolicy,
    ) -> Self {
        Self {
            registry,
            broadcaster,
            help_markup,
        }
    }

    /// テキストペイロードを処理
    ///
    /// # Arguments
    ///
    /// * `id` - 送信元の接続 ID
    /// * `payload` - 受信したテキスト
    pub async fn execute(&self, id: &ConnectionId, payload: &str) -> MessageOutcome {
        match Command::parse(payload) {
            Command::Help => {
                self.broadcaster
                    .unicast_system(id, &notice::help(self.help_markup))
                    .await;
                MessageOutcome::Help
            }
            Command::MissingAlias => {
                self.broadcaster
                    .unicast_system(id, &notice::missing_alias())
                    .await;
                MessageOutcome::AliasRejected
            }
            Command::Alias(raw) => self.rename(id, raw).await,
            Command::Unknown(command) => {
                tracing::debug!("Unrecognized command from {}: {}", id, command);
                self.broadcaster
                    .unicast_system(id, &notice::unrecognized_command())
                    .await;
                MessageOutcome::UnknownCommand
            }
            Command::Chat(text) => self.chat(id, text).await,
            Command::Empty => {
                tracing::debug!("Ignoring empty payload from {}", id);
                MessageOutcome::Ignored
            }
        }
    }

    async fn rename(&self, id: &ConnectionId, raw: &str) -> MessageOutcome {
        // 1. エスケープ済みの表示名を作成（以後は再エスケープしない）
        let new = match DisplayName::from_alias(raw) {
            Ok(name) => name,
            Err(e) => {
                tracing::debug!("Rejected alias from {}: {}", id, e);
                self.broadcaster
                    .unicast_system(id, &notice::invalid_alias(&e.to_string()))
                    .await;
                return MessageOutcome::AliasRejected;
            }
        };

        // 2. レジストリを更新（変更前の名前は同じロック内で取得）
        let _turn = self.broadcaster.turn().await;
        let Some(old) = self.registry.rename(id, new.clone()).await else {
            tracing::debug!("Connection {} left before rename", id);
            return MessageOutcome::Ignored;
        };
        tracing::info!("Connection {} renamed '{}' -> '{}'", id, old, new);

        // 3. 参加者一覧 → リネーム通知 の順に配信
        self.broadcaster.broadcast_roster().await;
        self.broadcaster
            .broadcast_system(&notice::renamed(&old, &new))
            .await;

        MessageOutcome::Renamed { old, new }
    }

    async fn chat(&self, id: &ConnectionId, text: &str) -> MessageOutcome {
        let sender = self.registry.lookup(id).await;
        let payload = match encode_chat(&sender, text, MarkupPolicy::Escape) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("Failed to encode chat from {}: {}", id, e);
                return MessageOutcome::Ignored;
            }
        };
        tracing::debug!("Broadcasting chat from '{}'", sender);
        let delivered = self.broadcaster.send_to_all(&payload).await;
        MessageOutcome::Chat { delivered }
    }
}
