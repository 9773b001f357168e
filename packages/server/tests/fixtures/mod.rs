//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use std::{net::SocketAddr, path::Path, time::Duration};

use futures_util::{SinkExt, StreamExt};
use lobby_server::ServerConfig;
use tempfile::TempDir;
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async,
    tungstenite::{Message, client::IntoClientRequest, http::HeaderValue},
};

pub const INDEX_HTML: &str = "<html><body>lobby</body></html>";

/// An in-process server bound to an ephemeral port.
///
/// The document root is a temporary directory holding `chat_client.html`.
/// Dropping the fixture shuts the server down.
pub struct TestServer {
    pub addr: SocketAddr,
    pub document_root: TempDir,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start() -> Self {
        Self::start_with(|_| {}).await
    }

    /// Start with a config adjusted by `configure`.
    pub async fn start_with(configure: impl FnOnce(&mut ServerConfig)) -> Self {
        let document_root = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::write(document_root.path().join("chat_client.html"), INDEX_HTML)
            .expect("Failed to write index file");

        let mut config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            document_root: document_root.path().to_path_buf(),
            ..ServerConfig::default()
        };
        configure(&mut config);

        let listener = TcpListener::bind(config.bind_addr())
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            let shutdown = async {
                let _ = shutdown_rx.await;
            };
            lobby_server::serve(listener, &config, shutdown)
                .await
                .expect("Server failed");
        });

        Self {
            addr,
            document_root,
            shutdown: Some(shutdown_tx),
            handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn ws_url(&self, path: &str) -> String {
        format!("ws://{}{}", self.addr, path)
    }

    pub fn write_file(&self, relative: impl AsRef<Path>, contents: &str) {
        let path = self.document_root.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(path, contents).expect("Failed to write file");
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.abort();
    }
}

type Socket = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

/// A chat connection driven by a test.
pub struct ChatClient {
    socket: Socket,
}

impl ChatClient {
    pub async fn connect(url: &str) -> Self {
        let (socket, _) = connect_async(url).await.expect("Failed to connect");
        Self { socket }
    }

    /// Connect with an `Origin` header, returning the handshake status on failure.
    pub async fn connect_with_origin(url: &str, origin: &str) -> Result<Self, u16> {
        let mut request = url.into_client_request().expect("Invalid request");
        request.headers_mut().insert(
            "Origin",
            HeaderValue::from_str(origin).expect("Invalid origin"),
        );
        match connect_async(request).await {
            Ok((socket, _)) => Ok(Self { socket }),
            Err(tokio_tungstenite::tungstenite::Error::Http(response)) => {
                Err(response.status().as_u16())
            }
            Err(e) => panic!("Unexpected handshake error: {e}"),
        }
    }

    pub async fn send(&mut self, text: &str) {
        self.socket
            .send(Message::Text(text.into()))
            .await
            .expect("Failed to send");
    }

    pub async fn send_binary(&mut self, bytes: Vec<u8>) {
        self.socket
            .send(Message::Binary(bytes.into()))
            .await
            .expect("Failed to send");
    }

    /// Next text frame parsed as JSON.
    pub async fn recv(&mut self) -> serde_json::Value {
        loop {
            let frame = tokio::time::timeout(Duration::from_secs(5), self.socket.next())
                .await
                .expect("Timed out waiting for a message")
                .expect("Connection closed")
                .expect("WebSocket error");
            if let Message::Text(text) = frame {
                return serde_json::from_str(text.as_str()).expect("Invalid JSON payload");
            }
        }
    }

    /// Receive until a text payload whose `value` ends with `suffix` arrives.
    pub async fn recv_until_suffix(&mut self, suffix: &str) -> serde_json::Value {
        loop {
            let msg = self.recv().await;
            if msg["value"].as_str().is_some_and(|v| v.ends_with(suffix)) {
                return msg;
            }
        }
    }

    /// Drain the three greeting payloads sent on connect.
    pub async fn skip_greeting(&mut self) {
        for _ in 0..3 {
            self.recv().await;
        }
    }

    pub async fn close(mut self) {
        let _ = self.socket.close(None).await;
    }
}
