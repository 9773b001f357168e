//! File extension to MIME type lookup.

use std::{collections::HashMap, path::Path};

/// Returned for extensions missing from the table.
pub const DEFAULT_MIME: &str = "text/plain";

/// Immutable extension to MIME type table.
///
/// Built once at startup and shared read-only by the static handler.
#[derive(Debug, Clone)]
pub struct MimeTable {
    types: HashMap<&'static str, &'static str>,
}

impl MimeTable {
    /// The types the chat client needs.
    pub fn standard() -> Self {
        let types = HashMap::from([
            ("html", "text/html"),
            ("htm", "text/html"),
            ("css", "text/css"),
            ("js", "text/javascript"),
            ("jpg", "image/jpeg"),
            ("png", "image/png"),
            ("gif", "image/gif"),
            ("ico", "image/x-icon"),
            ("json", "application/json"),
            ("xhtml", "application/xhtml+xml"),
        ]);
        Self { types }
    }

    /// Look up an extension, with or without the leading dot.
    pub fn lookup(&self, extension: &str) -> &'static str {
        let extension = extension.trim_start_matches('.').to_ascii_lowercase();
        self.types
            .get(extension.as_str())
            .copied()
            .unwrap_or(DEFAULT_MIME)
    }

    pub fn for_path(&self, path: &Path) -> &'static str {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map_or(DEFAULT_MIME, |ext| self.lookup(ext))
    }
}

impl Default for MimeTable {
    fn default() -> Self {
        Self::standard()
    }
}
