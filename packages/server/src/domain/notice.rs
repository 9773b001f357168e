//! Server-originated notices.
//!
//! Notices that embed a display name are assembled from the stored,
//! already-escaped name and are never escaped again.

use super::{
    escape::MarkupPolicy,
    value_object::{DisplayName, WireText},
};

pub const WELCOME: &str =
    "Welcome, use the /alias command to set a name, /help for a list of other commands.";

pub const HELP: &str = "available commands:<br />&nbsp;&nbsp;&nbsp;&nbsp;/help - show this help<br />&nbsp;&nbsp;&nbsp;&nbsp;/alias foo - set alias to foo";

pub const MISSING_ALIAS: &str = "You must enter an alias.";

pub const UNRECOGNIZED_COMMAND: &str = "unrecognized command";

/// Greeting unicast to a newly opened connection.
pub fn welcome() -> WireText {
    WireText::escape(WELCOME, MarkupPolicy::Escape)
}

/// Command list. The text carries intentional markup, so `policy` decides
/// whether it is escaped.
pub fn help(policy: MarkupPolicy) -> WireText {
    WireText::escape(HELP, policy)
}

pub fn missing_alias() -> WireText {
    WireText::escape(MISSING_ALIAS, MarkupPolicy::Escape)
}

pub fn unrecognized_command() -> WireText {
    WireText::escape(UNRECOGNIZED_COMMAND, MarkupPolicy::Escape)
}

/// Rejection for an alias that failed validation.
pub fn invalid_alias(reason: &str) -> WireText {
    WireText::escape(reason, MarkupPolicy::Escape)
}

pub fn joined(name: &DisplayName) -> WireText {
    WireText::pre_escaped(format!("{name} has joined the chat."))
}

pub fn left(name: &DisplayName) -> WireText {
    WireText::pre_escaped(format!("{name} has left the chat."))
}

pub fn renamed(old: &DisplayName, new: &DisplayName) -> WireText {
    WireText::pre_escaped(format!("{old} is now known as {new}"))
}
