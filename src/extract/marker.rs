//! Key-marker scanning.
//!
//! A draft record in the store starts with a key line such as
//!
//! ```text
//! LSS-3f2a9c1e-77aa-4b1c-9e1d-2b5f0c8a1d44:textInput
//! ```
//!
//! followed (on the next printable lines) by the draft's JSON document. This
//! module only finds those key lines; reconstructing the document is
//! [`window`](super::window)'s job.

use crate::config::ExtractConfig;

/// A line that starts a structured draft record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftCandidate {
    /// Conversation id parsed out of the key
    pub conversation_id: String,
    /// Index of the key line in the file's line sequence
    pub line_index: usize,
}

/// Returns `true` if the (trimmed) line begins a key record of any kind.
pub fn is_key_marker(line: &str, config: &ExtractConfig) -> bool {
    line.trim().starts_with(config.key_prefix.as_str())
}

/// Returns `true` if the line begins a draft-input key record.
pub fn is_draft_marker(line: &str, config: &ExtractConfig) -> bool {
    let line = line.trim();
    line.starts_with(config.key_prefix.as_str()) && line.contains(config.draft_tag.as_str())
}

/// Extracts the conversation id: the key up to the first delimiter, without
/// the namespace prefix.
///
/// ```
/// use chatsift::config::ExtractConfig;
/// use chatsift::extract::marker::conversation_id;
///
/// let config = ExtractConfig::default();
/// assert_eq!(conversation_id("LSS-abc-123:textInput", &config), "abc-123");
/// ```
pub fn conversation_id(line: &str, config: &ExtractConfig) -> String {
    let key = line
        .trim()
        .split(config.key_delimiter)
        .next()
        .unwrap_or_default();
    key.strip_prefix(config.key_prefix.as_str())
        .unwrap_or(key)
        .to_string()
}

/// Checks a single position of the line sequence.
pub fn candidate_at(lines: &[String], index: usize, config: &ExtractConfig) -> Option<DraftCandidate> {
    let line = lines.get(index)?;
    is_draft_marker(line, config).then(|| DraftCandidate {
        conversation_id: conversation_id(line, config),
        line_index: index,
    })
}

/// Lazily yields every draft candidate in `lines`, in line order.
pub fn scan_candidates<'a>(
    lines: &'a [String],
    config: &'a ExtractConfig,
) -> impl Iterator<Item = DraftCandidate> + 'a {
    (0..lines.len()).filter_map(move |i| candidate_at(lines, i, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_draft_marker_needs_prefix_and_tag() {
        let config = ExtractConfig::default();
        assert!(is_draft_marker("LSS-abc:textInput", &config));
        assert!(is_draft_marker("  LSS-abc:textInput  ", &config));
        assert!(!is_draft_marker("LSS-abc:scrollPosition", &config));
        assert!(!is_draft_marker("xLSS-abc:textInput", &config));
        assert!(!is_draft_marker("textInput", &config));
    }

    #[test]
    fn test_key_marker_any_tag() {
        let config = ExtractConfig::default();
        assert!(is_key_marker("LSS-abc:scrollPosition", &config));
        assert!(!is_key_marker("{\"type\":\"doc\"}", &config));
    }

    #[test]
    fn test_conversation_id() {
        let config = ExtractConfig::default();
        assert_eq!(
            conversation_id("LSS-3f2a9c1e-77aa:textInput", &config),
            "3f2a9c1e-77aa"
        );
        assert_eq!(conversation_id("LSS-:textInput", &config), "");
        assert_eq!(conversation_id("LSS-noDelimiter", &config), "noDelimiter");
    }

    #[test]
    fn test_scan_candidates_in_order() {
        let config = ExtractConfig::default();
        let input = lines(&[
            "noise",
            "LSS-one:textInput",
            "{\"type\":\"doc\"}",
            "LSS-two:other",
            "LSS-three:textInput",
        ]);
        let found: Vec<_> = scan_candidates(&input, &config).collect();
        assert_eq!(
            found,
            vec![
                DraftCandidate {
                    conversation_id: "one".into(),
                    line_index: 1
                },
                DraftCandidate {
                    conversation_id: "three".into(),
                    line_index: 4
                },
            ]
        );
    }

    #[test]
    fn test_candidate_at_out_of_bounds() {
        let config = ExtractConfig::default();
        assert!(candidate_at(&[], 0, &config).is_none());
    }
}
