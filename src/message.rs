//! Recovered message and conversation types.
//!
//! [`ChatMessage`] is the unit produced by extraction. [`Conversation`]
//! groups messages that share a conversation identifier, in discovery order.
//!
//! # Examples
//!
//! ```
//! use chatsift::{ChatMessage, MessageType};
//!
//! let draft = ChatMessage::draft("3f2a9c1e-77aa", "unsent thoughts");
//! assert!(draft.is_draft());
//! assert_eq!(draft.message_type(), MessageType::User);
//!
//! let loose = ChatMessage::fallback("a line recovered without context");
//! assert!(loose.is_unknown_conversation());
//! ```
//!
//! ## Serialization
//!
//! ```
//! use chatsift::ChatMessage;
//!
//! let msg = ChatMessage::draft("abc", "hello there");
//! let json = serde_json::to_string(&msg)?;
//!
//! // timestamp is never recovered and is omitted
//! assert!(!json.contains("timestamp"));
//! assert!(json.contains(r#""message_type":"user""#));
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Conversation id assigned when a message cannot be tied to a key marker.
pub const UNKNOWN_CONVERSATION: &str = "unknown";

/// Author role of a recovered message.
///
/// The store carries no reliable author signal, so everything recovered
/// today is [`User`](MessageType::User).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    #[default]
    User,
    Assistant,
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageType::User => write!(f, "user"),
            MessageType::Assistant => write!(f, "assistant"),
        }
    }
}

/// A chat message recovered from storage.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `conversation_id` | `String` | Key-marker id, or `"unknown"` |
/// | `text` | `String` | Trimmed, non-empty content |
/// | `message_type` | [`MessageType`] | Defaults to `user` |
/// | `is_draft` | `bool` | Recovered via the structured draft path |
/// | `timestamp` | `Option<DateTime<Utc>>` | Always `None` in practice |
///
/// Messages are immutable once built: only accessors are exposed besides
/// the builder methods that consume `self`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatMessage {
    pub conversation_id: String,

    /// Trimmed content. Extraction never emits an empty message.
    pub text: String,

    #[serde(default)]
    pub message_type: MessageType,

    #[serde(default)]
    pub is_draft: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ChatMessage {
    /// Creates a non-draft user message. The text is trimmed.
    pub fn new(conversation_id: impl Into<String>, text: impl AsRef<str>) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            text: text.as_ref().trim().to_string(),
            message_type: MessageType::User,
            is_draft: false,
            timestamp: None,
        }
    }

    /// Creates a message recovered from a structured draft record.
    pub fn draft(conversation_id: impl Into<String>, text: impl AsRef<str>) -> Self {
        Self::new(conversation_id, text).with_draft(true)
    }

    /// Creates a message recovered by the single-line fallback path.
    pub fn fallback(text: impl AsRef<str>) -> Self {
        Self::new(UNKNOWN_CONVERSATION, text)
    }

    #[must_use]
    pub fn with_draft(mut self, is_draft: bool) -> Self {
        self.is_draft = is_draft;
        self
    }

    #[must_use]
    pub fn with_message_type(mut self, message_type: MessageType) -> Self {
        self.message_type = message_type;
        self
    }

    pub fn conversation_id(&self) -> &str {
        &self.conversation_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn message_type(&self) -> MessageType {
        self.message_type
    }

    pub fn is_draft(&self) -> bool {
        self.is_draft
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    /// Returns `true` if the message could not be tied to a conversation.
    pub fn is_unknown_conversation(&self) -> bool {
        self.conversation_id == UNKNOWN_CONVERSATION
    }

    /// Returns the first eight characters of the conversation id.
    ///
    /// ```
    /// use chatsift::ChatMessage;
    ///
    /// let msg = ChatMessage::draft("3f2a9c1e-77aa-4b1c", "hello there");
    /// assert_eq!(msg.short_conversation_id(), "3f2a9c1e");
    /// ```
    pub fn short_conversation_id(&self) -> &str {
        match self.conversation_id.char_indices().nth(8) {
            Some((idx, _)) => &self.conversation_id[..idx],
            None => &self.conversation_id,
        }
    }

    /// Key used for deduplication: `(conversation_id, text)`.
    pub fn dedup_key(&self) -> (&str, &str) {
        (&self.conversation_id, &self.text)
    }
}

/// Messages sharing one conversation id, in discovery order.
///
/// Discovery order is the only ordering the store offers; it is not
/// chronological. `last_activity` stays `None` because no timestamps are
/// recovered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub last_activity: Option<DateTime<Utc>>,
}

impl Conversation {
    /// Creates an empty conversation.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            messages: Vec::new(),
            last_activity: None,
        }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of messages recovered via the draft path.
    pub fn draft_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_draft).count()
    }
}
