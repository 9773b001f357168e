//! Connection admission and content policy.

use serde::{Deserialize, Serialize};

use super::{error::HandshakeRejection, escape::MarkupPolicy};

/// Which `Origin` headers may open a chat connection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OriginPolicy {
    /// Any origin, including none, is accepted.
    #[default]
    Any,
    /// Only this exact origin is accepted.
    RequireExact(String),
}

impl OriginPolicy {
    fn check(&self, origin: Option<&str>) -> Result<(), HandshakeRejection> {
        match self {
            Self::Any => Ok(()),
            Self::RequireExact(allowed) if origin == Some(allowed.as_str()) => Ok(()),
            Self::RequireExact(_) => Err(HandshakeRejection::ForbiddenOrigin(
                origin.unwrap_or_default().to_string(),
            )),
        }
    }
}

/// Rules applied to every chat connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPolicy {
    /// The only resource path that accepts WebSocket upgrades
    pub chat_path: String,
    pub origin: OriginPolicy,
    /// Markup handling for the `/help` text
    pub help_markup: MarkupPolicy,
}

impl Default for ChatPolicy {
    fn default() -> Self {
        Self {
            chat_path: "/chat".to_string(),
            origin: OriginPolicy::Any,
            help_markup: MarkupPolicy::Trusted,
        }
    }
}

impl ChatPolicy {
    /// Decide whether an upgrade request may become a chat connection.
    ///
    /// The resource path is checked before the origin.
    pub fn validate_handshake(
        &self,
        path: &str,
        origin: Option<&str>,
    ) -> Result<(), HandshakeRejection> {
        if path != self.chat_path {
            return Err(HandshakeRejection::UnknownResource(path.to_string()));
        }
        self.origin.check(origin)
    }
}
