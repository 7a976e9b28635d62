//! Queries over the aggregated message list.
//!
//! | Query | Function | Notes |
//! |-------|----------|-------|
//! | Recent | [`recent`] | Tail of aggregate order, not chronological |
//! | Search | [`search`] | Substring match, optionally case-insensitive |
//! | Spans | [`match_spans`] | Byte ranges of every match, for highlighting |
//!
//! # Example
//!
//! ```
//! use chatsift::ChatMessage;
//! use chatsift::query::{match_spans, search};
//!
//! let messages = vec![ChatMessage::fallback("say hello now")];
//!
//! assert_eq!(search(&messages, "Hello", false)?.len(), 1);
//! assert!(search(&messages, "Hello", true)?.is_empty());
//!
//! assert_eq!(match_spans("Hello hello", "HELLO", false)?, vec![0..5, 6..11]);
//! # Ok::<(), chatsift::ChatsiftError>(())
//! ```

use std::ops::Range;

use regex::{Regex, RegexBuilder};

use crate::error::{ChatsiftError, Result};
use crate::message::ChatMessage;

/// Returns the last `limit` messages (all of them if there are fewer).
///
/// A zero limit yields nothing.
pub fn recent(messages: &[ChatMessage], limit: usize) -> Vec<ChatMessage> {
    let start = messages.len().saturating_sub(limit);
    messages[start..].to_vec()
}

/// Returns the messages whose text contains `query`, in input order.
///
/// Matching uses the same matcher as [`match_spans`], so every hit for a
/// non-empty query has at least one span to highlight. An empty query
/// matches every message.
pub fn search(messages: &[ChatMessage], query: &str, case_sensitive: bool) -> Result<Vec<ChatMessage>> {
    let re = matcher(query, case_sensitive)?;
    Ok(messages
        .iter()
        .filter(|m| re.is_match(&m.text))
        .cloned()
        .collect())
}

/// Byte ranges of all non-overlapping occurrences of `query` in `text`.
///
/// Ranges index into `text` itself, so callers can wrap them without
/// reordering or rewriting the original. An empty query has no spans.
pub fn match_spans(text: &str, query: &str, case_sensitive: bool) -> Result<Vec<Range<usize>>> {
    if query.is_empty() {
        return Ok(Vec::new());
    }
    let re = matcher(query, case_sensitive)?;
    Ok(re.find_iter(text).map(|m| m.range()).collect())
}

/// Wraps each span of `text` in `open` / `close`.
///
/// ```
/// use chatsift::query::highlight;
///
/// assert_eq!(highlight("say hello", &[4..9], "**", "**"), "say **hello**");
/// ```
pub fn highlight(text: &str, spans: &[Range<usize>], open: &str, close: &str) -> String {
    let mut out = String::with_capacity(text.len() + spans.len() * (open.len() + close.len()));
    let mut cursor = 0;
    for span in spans {
        out.push_str(&text[cursor..span.start]);
        out.push_str(open);
        out.push_str(&text[span.clone()]);
        out.push_str(close);
        cursor = span.end;
    }
    out.push_str(&text[cursor..]);
    out
}

/// Literal matcher for `query`, case-folded unless `case_sensitive`.
fn matcher(query: &str, case_sensitive: bool) -> Result<Regex> {
    RegexBuilder::new(&regex::escape(query))
        .case_insensitive(!case_sensitive)
        .build()
        .map_err(|e| ChatsiftError::invalid_argument("query", e.to_string()))
}
