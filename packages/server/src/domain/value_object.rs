//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::{
    error::ValueObjectError,
    escape::{MarkupPolicy, escape},
};

/// Maximum length of a raw alias, in characters.
pub const MAX_ALIAS_CHARS: usize = 100;

/// Connection identifier value object.
///
/// Stable key for one live WebSocket session. The transport owns the
/// connection itself; the domain only ever holds this key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Short hex prefix used for default display names.
    pub fn short(&self) -> String {
        let simple = self.0.simple().to_string();
        simple[..8].to_string()
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Text that is already safe to embed in a wire payload.
///
/// Holding a `WireText` means the wire pass (and, unless the text was
/// explicitly trusted, the markup pass) has been applied exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WireText(String);

impl WireText {
    /// Escape raw text under the given markup policy.
    pub fn escape(raw: &str, policy: MarkupPolicy) -> Self {
        Self(escape(raw, policy))
    }

    /// Wrap text that is composed only of already-escaped fragments.
    pub(crate) fn pre_escaped(text: String) -> Self {
        Self(text)
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for WireText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display name value object.
///
/// Stored pre-escaped for both the wire format and markup, so it can be
/// embedded in every broadcast without escaping it again.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayName(String);

impl DisplayName {
    /// Sender name for server-originated messages.
    pub const SERVER: &'static str = "server";

    /// Name reported for connections that are no longer registered.
    pub const UNKNOWN: &'static str = "unknown";

    /// Create a DisplayName from a user-supplied alias.
    ///
    /// # Arguments
    ///
    /// * `raw` - The alias exactly as typed by the user
    ///
    /// # Returns
    ///
    /// A Result containing the escaped DisplayName or an error if validation fails
    pub fn from_alias(raw: &str) -> Result<Self, ValueObjectError> {
        if raw.is_empty() {
            return Err(ValueObjectError::AliasEmpty);
        }
        let len = raw.chars().count();
        if len > MAX_ALIAS_CHARS {
            return Err(ValueObjectError::AliasTooLong {
                max: MAX_ALIAS_CHARS,
                actual: len,
            });
        }
        Ok(Self(escape(raw, MarkupPolicy::Escape)))
    }

    /// Default name assigned to a connection that has not set an alias.
    pub fn default_for(id: &ConnectionId) -> Self {
        Self(format!("guest-{}", id.short()))
    }

    /// Sender name for server-originated messages.
    pub fn server() -> Self {
        Self(Self::SERVER.to_string())
    }

    /// Sentinel returned by lookups on absent connections.
    pub fn unknown() -> Self {
        Self(Self::UNKNOWN.to_string())
    }

    /// Get the escaped string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timestamp value object.
///
/// Represents a Unix timestamp in milliseconds (JST).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a new Timestamp.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
