//! UseCase 層のエラー定義

use thiserror::Error;

/// 接続処理のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConnectError {
    /// 同じ接続が既に登録されている
    #[error("Connection {0} is already registered")]
    AlreadyConnected(String),
}
