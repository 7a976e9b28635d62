//! Flattening rich-text draft documents.
//!
//! Drafts are stored as a document tree:
//!
//! ```json
//! {"type":"doc","content":[
//!   {"type":"paragraph","content":[{"type":"text","text":"Hello"}]},
//!   {"type":"paragraph","content":[{"type":"text","text":"world"}]}
//! ]}
//! ```
//!
//! Flattening walks `content` depth-first and joins every `text` leaf with a
//! single space, preserving document order.

use serde_json::Value;

/// Concatenates the text leaves of `node` in document order.
///
/// A node whose `type` is `"text"` contributes its `text` field (an empty
/// string if missing) and is not descended into. Any other object descends
/// into `content`, which may be an array or a single nested node. The
/// result is trimmed.
///
/// ```
/// use chatsift::extract::document::flatten_text;
/// use serde_json::json;
///
/// let doc = json!({"type":"doc","content":[
///     {"type":"text","text":"a"},
///     {"type":"text","text":"b"}
/// ]});
/// assert_eq!(flatten_text(&doc), "a b");
/// ```
pub fn flatten_text(node: &Value) -> String {
    let mut parts = Vec::new();
    collect_text(node, &mut parts);
    parts.join(" ").trim().to_string()
}

fn collect_text<'a>(node: &'a Value, parts: &mut Vec<&'a str>) {
    match node {
        Value::Object(map) => {
            if map.get("type").and_then(Value::as_str) == Some("text") {
                parts.push(map.get("text").and_then(Value::as_str).unwrap_or_default());
            } else if let Some(content) = map.get("content") {
                collect_text(content, parts);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_text(item, parts);
            }
        }
        Value::String(_) | Value::Number(_) | Value::Bool(_) | Value::Null => {}
    }
}
