//! Server configuration.

use std::path::PathBuf;

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::domain::{ChatPolicy, MarkupPolicy, OriginPolicy};

/// Configuration for the Lobby server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind (default `"127.0.0.1"`).
    pub host: String,
    /// Port to bind (default `9002`, `0` for auto-assign).
    pub port: u16,
    /// Resource path that accepts chat connections (default `"/chat"`).
    pub chat_path: String,
    /// Directory static files are served from.
    pub document_root: PathBuf,
    /// File served for paths ending in `/`.
    pub index_file: String,
    /// Which origins may open a chat connection.
    pub origin: OriginPolicy,
    /// Escape markup in the `/help` text as well.
    pub escape_help_markup: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 9002,
            chat_path: "/chat".into(),
            document_root: PathBuf::from("."),
            index_file: "chat_client.html".into(),
            origin: OriginPolicy::Any,
            escape_help_markup: false,
        }
    }
}

impl ServerConfig {
    /// `host:port` string for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn chat_policy(&self) -> ChatPolicy {
        ChatPolicy {
            chat_path: self.chat_path.clone(),
            origin: self.origin.clone(),
            help_markup: if self.escape_help_markup {
                MarkupPolicy::Escape
            } else {
                MarkupPolicy::Trusted
            },
        }
    }
}

/// Command line arguments for `lobby-server`.
#[derive(Debug, Parser)]
#[command(name = "lobby-server", version, about = "Single-room WebSocket chat server")]
pub struct ServerArgs {
    /// Host to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind
    #[arg(short, long, default_value_t = 9002)]
    pub port: u16,

    /// Resource path that accepts chat connections
    #[arg(long, default_value = "/chat")]
    pub chat_path: String,

    /// Directory static files are served from
    #[arg(long, default_value = ".")]
    pub document_root: PathBuf,

    /// File served for paths ending in `/`
    #[arg(long, default_value = "chat_client.html")]
    pub index_file: String,

    /// Reject chat connections whose Origin header differs from this value
    #[arg(long, value_name = "ORIGIN")]
    pub require_origin: Option<String>,

    /// Escape markup in the /help text
    #[arg(long)]
    pub escape_help_markup: bool,

    /// Default log level when RUST_LOG is unset
    #[arg(long, default_value = "debug")]
    pub log_level: String,
}

impl ServerArgs {
    pub fn to_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host.clone(),
            port: self.port,
            chat_path: self.chat_path.clone(),
            document_root: self.document_root.clone(),
            index_file: self.index_file.clone(),
            origin: self
                .require_origin
                .clone()
                .map_or(OriginPolicy::Any, OriginPolicy::RequireExact),
            escape_help_markup: self.escape_help_markup,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bind_addr() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.bind_addr(), "127.0.0.1:9002");
    }

    #[test]
    fn default_chat_policy_is_relaxed() {
        let policy = ServerConfig::default().chat_policy();
        assert_eq!(policy.chat_path, "/chat");
        assert_eq!(policy.origin, OriginPolicy::Any);
        assert_eq!(policy.help_markup, MarkupPolicy::Trusted);
    }

    #[test]
    fn escape_help_markup_flag() {
        let cfg = ServerConfig {
            escape_help_markup: true,
            ..ServerConfig::default()
        };
        assert_eq!(cfg.chat_policy().help_markup, MarkupPolicy::Escape);
    }

    #[test]
    fn args_defaults_match_config_defaults() {
        let args = ServerArgs::try_parse_from(["lobby-server"]).unwrap();
        assert_eq!(args.to_config(), ServerConfig::default());
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn args_require_origin() {
        let args = ServerArgs::try_parse_from([
            "lobby-server",
            "--port",
            "8080",
            "--require-origin",
            "http://127.0.0.1",
        ])
        .unwrap();
        let cfg = args.to_config();
        assert_eq!(cfg.port, 8080);
        assert_eq!(
            cfg.origin,
            OriginPolicy::RequireExact("http://127.0.0.1".into())
        );
    }

    #[test]
    fn serde_roundtrip() {
        let cfg = ServerConfig {
            origin: OriginPolicy::RequireExact("http://127.0.0.1".into()),
            ..ServerConfig::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: ServerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
