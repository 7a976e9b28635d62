//! Bounded JSON reconstruction.
//!
//! The printable-string pass splits a draft document across several lines
//! and appends whatever key follows it. Reconstruction joins a bounded
//! window of successor lines, then cuts the buffer at the point where the
//! leading object's braces balance.

use serde_json::Value;

use crate::config::ExtractConfig;

use super::marker::is_key_marker;

/// Joins the lines following `start` into one buffer.
///
/// The window ends at the first blank line, the first line that is itself a
/// key marker, or after `max_lookahead` lines, whichever comes first.
/// Lines are trimmed and concatenated without a separator.
pub fn collect_window(lines: &[String], start: usize, config: &ExtractConfig) -> String {
    lines
        .iter()
        .skip(start + 1)
        .take(config.max_lookahead)
        .map(|line| line.trim())
        .take_while(|line| !line.is_empty() && !is_key_marker(line, config))
        .collect()
}

/// Returns the byte offset just past the object that opens at the first `{`.
///
/// Braces are counted without regard to string literals. `None` when the
/// buffer has no `{` or the depth never returns to zero.
pub fn balanced_object_end(buffer: &str) -> Option<usize> {
    let start = buffer.find('{')?;
    let mut depth = 0usize;

    for (offset, byte) in buffer.bytes().enumerate().skip(start) {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(offset + 1);
                }
            }
            _ => {}
        }
    }

    None
}

/// Rebuilds the draft document that follows the key line at `start`.
///
/// Every failure is a silent skip: the store produces many false-positive
/// key lines.
pub fn reconstruct_document(lines: &[String], start: usize, config: &ExtractConfig) -> Option<Value> {
    let buffer = collect_window(lines, start, config);

    if !buffer.starts_with(config.doc_root.as_str()) {
        tracing::debug!(line = start, "draft candidate has no document root");
        return None;
    }

    let Some(end) = balanced_object_end(&buffer) else {
        tracing::debug!(
            line = start,
            lookahead = config.max_lookahead,
            "draft document not closed within look-ahead window"
        );
        return None;
    };

    match serde_json::from_str(&buffer[..end]) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!(line = start, error = %err, "discarding unparseable draft document");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_window_stops_at_next_marker() {
        let config = ExtractConfig::default();
        let input = lines(&["LSS-a:textInput", "{\"x\":", "1}", "LSS-b:textInput", "{}"]);
        assert_eq!(collect_window(&input, 0, &config), "{\"x\":1}");
    }

    #[test]
    fn test_window_stops_at_blank_line() {
        let config = ExtractConfig::default();
        let input = lines(&["LSS-a:textInput", " {\"x\": ", "   ", "1}"]);
        assert_eq!(collect_window(&input, 0, &config), "{\"x\":");
    }

    #[test]
    fn test_window_is_bounded() {
        let config = ExtractConfig::default().with_max_lookahead(3);
        let input = lines(&["LSS-a:textInput", "a", "b", "c", "d"]);
        assert_eq!(collect_window(&input, 0, &config), "abc");
    }

    #[test]
    fn test_window_at_end_of_input() {
        let config = ExtractConfig::default();
        let input = lines(&["LSS-a:textInput"]);
        assert_eq!(collect_window(&input, 0, &config), "");
    }

    #[test]
    fn test_balanced_end_ignores_trailing_garbage() {
        let buf = r#"{"a":{"b":1}}LSS-garbage}"#;
        let end = balanced_object_end(buf).unwrap();
        assert_eq!(&buf[..end], r#"{"a":{"b":1}}"#);
    }

    #[test]
    fn test_balanced_end_unclosed() {
        assert_eq!(balanced_object_end(r#"{"a":{"b":1}"#), None);
        assert_eq!(balanced_object_end("no braces"), None);
    }

    #[test]
    fn test_reconstruct_document() {
        let config = ExtractConfig::default();
        let input = lines(&[
            "LSS-a:textInput",
            r#"{"type":"doc","content":[{"type":"paragraph","#,
            r#""content":[{"type":"text","text":"hi there"}]}]}trailing"#,
        ]);
        let doc = reconstruct_document(&input, 0, &config).unwrap();
        assert_eq!(doc["type"], "doc");
    }

    #[test]
    fn test_reconstruct_requires_doc_root() {
        let config = ExtractConfig::default();
        let input = lines(&["LSS-a:textInput", r#"{"type":"paragraph"}"#]);
        assert!(reconstruct_document(&input, 0, &config).is_none());
    }

    #[test]
    fn test_reconstruct_rejects_invalid_json() {
        let config = ExtractConfig::default();
        let input = lines(&["LSS-a:textInput", r#"{"type":"doc",,}"#]);
        assert!(reconstruct_document(&input, 0, &config).is_none());
    }

    /// Marker, an opening line, `fillers` text nodes, then the closing node.
    fn document_closing_after(fillers: usize) -> Vec<String> {
        let mut input = lines(&["LSS-a:textInput", r#"{"type":"doc","content":["#]);
        for _ in 0..fillers {
            input.push(r#"{"type":"text","text":"word"},"#.to_string());
        }
        input.push(r#"{"type":"text","text":"end"}]}"#.to_string());
        input
    }

    #[test]
    fn test_reconstruct_closes_on_last_lookahead_line() {
        let config = ExtractConfig::default();
        let input = document_closing_after(8);
        assert_eq!(input.len() - 1, config.max_lookahead);
        assert!(reconstruct_document(&input, 0, &config).is_some());
    }

    #[test]
    fn test_reconstruct_closes_past_lookahead() {
        let config = ExtractConfig::default();
        let input = document_closing_after(9);
        assert_eq!(input.len() - 1, config.max_lookahead + 1);
        assert!(reconstruct_document(&input, 0, &config).is_none());
    }

    #[test]
    fn test_reconstruct_truncated_window() {
        let config = ExtractConfig::default();
        let mut input = lines(&["LSS-a:textInput", r#"{"type":"doc","content":["#]);
        for _ in 0..12 {
            input.push(r#"{"type":"text","text":"more words"},"#.to_string());
        }
        input.push("]}".to_string());
        assert!(reconstruct_document(&input, 0, &config).is_none());
    }
}
