//! Server-side handler for plain HTTP requests.
//!
//! Resolves request paths against a document root. Only `GET` serves files;
//! `POST` is accepted and ignored, anything else is refused.

use std::{
    io::ErrorKind,
    path::{Component, Path, PathBuf},
    sync::Arc,
};

use axum::http::Method;
use thiserror::Error;

use super::mime::MimeTable;

/// Errors that end a static request
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StaticFileError {
    #[error("Request for unknown resource {0}")]
    NotFound(String),

    /// Directories, unreadable files and paths escaping the document root
    #[error("Request for invalid resource {0}")]
    Forbidden(String),

    #[error("Unsupported method: {0}")]
    UnsupportedMethod(String),
}

/// File contents and their MIME type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticResource {
    pub body: Vec<u8>,
    pub content_type: &'static str,
}

/// Successful outcome of a static request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaticResponse {
    File(StaticResource),
    /// Accepted with no body
    Empty,
}

/// Request handler for the server role
#[derive(Debug, Clone)]
pub struct StaticRequestHandler {
    root: PathBuf,
    index_file: String,
    mime: Arc<MimeTable>,
}

impl StaticRequestHandler {
    pub fn new(root: impl Into<PathBuf>, index_file: impl Into<String>, mime: Arc<MimeTable>) -> Self {
        Self {
            root: root.into(),
            index_file: index_file.into(),
            mime,
        }
    }

    /// Dispatch on the request method.
    pub async fn handle(
        &self,
        method: &Method,
        path: &str,
    ) -> Result<StaticResponse, StaticFileError> {
        match *method {
            Method::GET => self.get(path).await.map(StaticResponse::File),
            Method::POST => {
                tracing::debug!("POST {} accepted without processing", path);
                Ok(StaticResponse::Empty)
            }
            _ => Err(StaticFileError::UnsupportedMethod(method.to_string())),
        }
    }

    /// Read the file a request path points at.
    pub async fn get(&self, path: &str) -> Result<StaticResource, StaticFileError> {
        let file = self.resolve(path)?;

        let metadata = match tokio::fs::metadata(&file).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StaticFileError::NotFound(path.to_string()));
            }
            Err(e) => {
                tracing::warn!("Cannot stat {}: {}", file.display(), e);
                return Err(StaticFileError::Forbidden(path.to_string()));
            }
        };
        if !metadata.is_file() {
            return Err(StaticFileError::Forbidden(path.to_string()));
        }

        let body = tokio::fs::read(&file).await.map_err(|e| {
            tracing::warn!("Cannot read {}: {}", file.display(), e);
            StaticFileError::Forbidden(path.to_string())
        })?;

        Ok(StaticResource {
            body,
            content_type: self.mime.for_path(&file),
        })
    }

    /// Map a request path onto the document root.
    fn resolve(&self, path: &str) -> Result<PathBuf, StaticFileError> {
        let relative = path.trim_start_matches('/');
        let mut file = self.root.clone();
        for component in Path::new(relative).components() {
            match component {
                Component::Normal(part) => file.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(StaticFileError::Forbidden(path.to_string()));
                }
            }
        }
        if path.ends_with('/') {
            file.push(&self.index_file);
        }
        Ok(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler_for(root: &Path) -> StaticRequestHandler {
        StaticRequestHandler::new(root, "chat_client.html", Arc::new(MimeTable::standard()))
    }

    #[tokio::test]
    async fn test_get_root_serves_index_file() {
        // テスト項目: "/" へのリクエストでインデックスファイルが返される
        // given (前提条件):
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("chat_client.html"), "<html></html>").unwrap();
        let handler = handler_for(dir.path());

        // when (操作):
        let resource = handler.get("/").await.unwrap();

        // then (期待する結果):
        assert_eq!(resource.body, b"<html></html>");
        assert_eq!(resource.content_type, "text/html");
    }

    #[tokio::test]
    async fn test_get_file_with_mime_type() {
        // テスト項目: ファイルの内容と拡張子に応じた MIME タイプが返される
        // given (前提条件):
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("js")).unwrap();
        std::fs::write(dir.path().join("js/app.js"), "let x = 1;").unwrap();
        let handler = handler_for(dir.path());

        // when (操作):
        let resource = handler.get("/js/app.js").await.unwrap();

        // then (期待する結果):
        assert_eq!(resource.body, b"let x = 1;");
        assert_eq!(resource.content_type, "text/javascript");
    }

    #[tokio::test]
    async fn test_get_missing_file_is_not_found() {
        // テスト項目: 存在しないファイルは NotFound になる
        // given (前提条件):
        let dir = tempfile::tempdir().unwrap();
        let handler = handler_for(dir.path());

        // when (操作):
        let result = handler.get("/missing.html").await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(StaticFileError::NotFound("/missing.html".to_string()))
        );
    }

    #[tokio::test]
    async fn test_get_directory_is_forbidden() {
        // テスト項目: ディレクトリへのリクエストは Forbidden になる
        // given (前提条件):
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("assets")).unwrap();
        let handler = handler_for(dir.path());

        // when (操作):
        let result = handler.get("/assets").await;

        // then (期待する結果):
        assert_eq!(result, Err(StaticFileError::Forbidden("/assets".to_string())));
    }

    #[tokio::test]
    async fn test_get_parent_traversal_is_forbidden() {
        // テスト項目: ドキュメントルート外を指すパスは Forbidden になる
        // given (前提条件):
        let dir = tempfile::tempdir().unwrap();
        let handler = handler_for(dir.path());

        // when (操作):
        let result = handler.get("/../etc/passwd").await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(StaticFileError::Forbidden("/../etc/passwd".to_string()))
        );
    }

    #[tokio::test]
    async fn test_handle_post_is_accepted_empty() {
        // テスト項目: POST は何もせず受け付けられる
        // given (前提条件):
        let dir = tempfile::tempdir().unwrap();
        let handler = handler_for(dir.path());

        // when (操作):
        let result = handler.handle(&Method::POST, "/form").await;

        // then (期待する結果):
        assert_eq!(result, Ok(StaticResponse::Empty));
    }

    #[tokio::test]
    async fn test_handle_unsupported_method() {
        // テスト項目: GET / POST 以外のメソッドは UnsupportedMethod になる
        // given (前提条件):
        let dir = tempfile::tempdir().unwrap();
        let handler = handler_for(dir.path());

        // when (操作):
        let result = handler.handle(&Method::DELETE, "/").await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(StaticFileError::UnsupportedMethod("DELETE".to_string()))
        );
    }
}
