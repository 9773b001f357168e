//! Text escaping for the wire format and the markup embedding context.
//!
//! Wire escaping makes a string safe to place between double quotes inside a
//! JSON payload. Markup escaping makes it safe to drop into an HTML document.
//! Wire escaping always runs first.

use std::fmt::Write as _;

/// Whether markup metacharacters are escaped in addition to the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkupPolicy {
    /// Escape `&`, `<` and `>`.
    #[default]
    Escape,
    /// Text is trusted to contain intentional markup.
    Trusted,
}

/// Escape wire-format metacharacters.
///
/// Backslash and double quote are escaped, as are ASCII control characters so
/// the payload always parses.
pub fn escape_wire(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            c if c.is_ascii_control() && c != '\u{7f}' => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}

/// Escape markup metacharacters.
///
/// `&` is replaced first so the entities introduced for `<` and `>` survive.
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}

/// Run the wire pass, then the markup pass unless the policy trusts the text.
pub fn escape(raw: &str, policy: MarkupPolicy) -> String {
    let wire = escape_wire(raw);
    match policy {
        MarkupPolicy::Escape => escape_markup(&wire),
        MarkupPolicy::Trusted => wire,
    }
}
