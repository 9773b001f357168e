//! Repository trait definitions.
//!
//! ドメイン層が必要とするデータアクセスの抽象。
//! 実装は infrastructure 層に置きます（依存性の逆転）。

use async_trait::async_trait;

use super::{ConnectionId, DisplayName, Participant};

/// 接続とその表示名の対応を管理するレジストリ
///
/// すべての変更とスナップショットは互いに排他的に実行されます。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectionRegistry: Send + Sync {
    /// 接続をデフォルト名で登録する
    ///
    /// 既に登録済みの場合は何もせず `None` を返す
    async fn add(&self, id: ConnectionId) -> Option<DisplayName>;

    /// 接続を削除し、削除時点の表示名を返す
    ///
    /// 既に削除済みの場合は `None`（エラーではない）
    async fn remove(&self, id: &ConnectionId) -> Option<DisplayName>;

    /// 表示名を上書きし、変更前の表示名を返す
    ///
    /// 未登録の接続に対しては何もせず `None` を返す
    async fn rename(&self, id: &ConnectionId, name: DisplayName) -> Option<DisplayName>;

    /// 現在の表示名を取得する（未登録なら `unknown`）
    async fn lookup(&self, id: &ConnectionId) -> DisplayName;

    /// ある時点の表示名一覧（参加順）
    async fn snapshot(&self) -> Vec<DisplayName>;

    /// ある時点の接続 ID 一覧（参加順）
    async fn connection_ids(&self) -> Vec<ConnectionId>;

    /// ある時点の参加者一覧（参加順）
    async fn participants(&self) -> Vec<Participant>;

    /// 登録中の接続数
    async fn count(&self) -> usize;
}
