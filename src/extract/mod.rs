//! Per-file message extraction.
//!
//! Two independent paths run over the same line sequence:
//!
//! | Path | Module | Conversation | `is_draft` |
//! |------|--------|--------------|------------|
//! | Structured draft | [`marker`] + [`window`] + [`document`] | from key | `true` |
//! | Single-line fallback | [`fallback`] | `"unknown"` | `false` |
//!
//! A line can feed both paths. For each line the draft result (if any) is
//! emitted before the fallback result.
//!
//! # Example
//!
//! ```rust
//! use chatsift::config::ExtractConfig;
//! use chatsift::extract::extract_messages;
//!
//! let lines: Vec<String> = [
//!     "LSS-abc:textInput",
//!     r#"{"type":"doc","content":[{"type":"text","text":"unsent draft"}]}"#,
//! ]
//! .iter()
//! .map(|s| s.to_string())
//! .collect();
//!
//! let messages = extract_messages(&lines, &ExtractConfig::default());
//! assert_eq!(messages[0].conversation_id, "abc");
//! assert_eq!(messages[0].text, "unsent draft");
//! assert!(messages[0].is_draft);
//! ```

pub mod document;
pub mod fallback;
pub mod marker;
pub mod window;

use crate::config::ExtractConfig;
use crate::message::ChatMessage;

pub use document::flatten_text;
pub use marker::{DraftCandidate, scan_candidates};
pub use window::{balanced_object_end, reconstruct_document};

/// Turns a draft candidate into a message, or skips it.
pub fn extract_draft(
    lines: &[String],
    candidate: &DraftCandidate,
    config: &ExtractConfig,
) -> Option<ChatMessage> {
    let doc = reconstruct_document(lines, candidate.line_index, config)?;
    let text = flatten_text(&doc);

    if text.chars().count() <= config.min_draft_len {
        tracing::debug!(
            conversation = %candidate.conversation_id,
            "dropping draft below noise floor"
        );
        return None;
    }

    Some(ChatMessage::draft(&candidate.conversation_id, text))
}

/// Extracts every message from one file's lines, in discovery order.
pub fn extract_messages(lines: &[String], config: &ExtractConfig) -> Vec<ChatMessage> {
    let mut messages = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        if let Some(candidate) = marker::candidate_at(lines, index, config) {
            messages.extend(extract_draft(lines, &candidate, config));
        }
        messages.extend(fallback::extract_line(line.trim(), config));
    }

    messages
}
