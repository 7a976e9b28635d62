//! Single-line fallback extraction.
//!
//! Many messages sit in the store as one-line JSON fragments with no draft
//! key in front of them. This path grabs the first `"text":"..."` pair on
//! any line. It trades precision for recall, so its results are never
//! attributed to a conversation.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::ExtractConfig;
use crate::message::ChatMessage;

static TEXT_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""text":"([^"]+)""#).unwrap());

/// Returns the raw capture of the first `"text":"..."` pair on the line.
pub fn capture_text(line: &str) -> Option<&str> {
    TEXT_FIELD
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Decodes JSON escapes (`\n`, `é`, ...) in a captured string body.
///
/// Captures that are not a valid JSON string body are returned unchanged.
pub fn unescape(raw: &str) -> String {
    serde_json::from_str::<String>(&format!("\"{raw}\"")).unwrap_or_else(|_| raw.to_string())
}

/// Recovers at most one message from a single line.
///
/// The decoded, trimmed capture must be longer than
/// [`min_fallback_len`](ExtractConfig::min_fallback_len) characters.
pub fn extract_line(line: &str, config: &ExtractConfig) -> Option<ChatMessage> {
    let text = unescape(capture_text(line)?);
    let text = text.trim();
    (text.chars().count() > config.min_fallback_len).then(|| ChatMessage::fallback(text))
}
