//! WebSocket message DTOs for the chat lobby.
//!
//! Names and message text arrive here already escaped (see
//! [`crate::domain::escape`]) and are embedded verbatim as raw JSON strings.

use serde::Serialize;
use serde_json::value::RawValue;
use thiserror::Error;

use crate::domain::{DisplayName, MarkupPolicy, WireText};

/// Errors raised while encoding a payload
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to encode payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Message type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageType {
    Participants,
    Msg,
}

/// Roster update broadcast after every registry change
#[derive(Debug, Serialize)]
pub struct ParticipantsMessage {
    pub r#type: MessageType,
    pub value: Vec<Box<RawValue>>,
}

/// Chat or system message
#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub r#type: MessageType,
    pub sender: Box<RawValue>,
    pub value: Box<RawValue>,
}

fn quoted(escaped: &str) -> Result<Box<RawValue>, EncodeError> {
    Ok(RawValue::from_string(format!("\"{escaped}\""))?)
}

/// `{"type":"participants","value":[<name>, ...]}`
pub fn encode_roster(names: &[DisplayName]) -> Result<String, EncodeError> {
    let value = names
        .iter()
        .map(|name| quoted(name.as_str()))
        .collect::<Result<Vec<_>, _>>()?;
    let message = ParticipantsMessage {
        r#type: MessageType::Participants,
        value,
    };
    Ok(serde_json::to_string(&message)?)
}

/// `{"type":"msg","sender":"<name>","value":"<text>"}` for text that is
/// already escaped.
pub fn encode_message(sender: &DisplayName, text: &WireText) -> Result<String, EncodeError> {
    let message = ChatMessage {
        r#type: MessageType::Msg,
        sender: quoted(sender.as_str())?,
        value: quoted(text.as_str())?,
    };
    Ok(serde_json::to_string(&message)?)
}

/// Escape raw `text` under `policy` and encode it as a chat message.
pub fn encode_chat(
    sender: &DisplayName,
    text: &str,
    policy: MarkupPolicy,
) -> Result<String, EncodeError> {
    encode_message(sender, &WireText::escape(text, policy))
}

/// Encode a server-originated message.
pub fn encode_system(text: &WireText) -> Result<String, EncodeError> {
    encode_message(&DisplayName::server(), text)
}
