//! # Chatsift
//!
//! Recovers chat messages, including unsent drafts, from the Local Storage
//! files of a desktop chat application, without parsing the storage format.
//!
//! ## Overview
//!
//! Each storage file is reduced to its printable lines, and two heuristics
//! run over those lines:
//!
//! - **Structured drafts** — a `LSS-<conversation>:textInput` key line is
//!   followed by a rich-text JSON document; the document is rebuilt from a
//!   bounded look-ahead window and flattened to text.
//! - **Fallback** — any single line carrying a `"text":"..."` pair.
//!
//! Results from all files are merged in a fixed order, deduplicated on
//! `(conversation_id, text)` and grouped into conversations. Everything is
//! best-effort: missing directories, unreadable files and malformed records
//! shrink the result instead of failing the call.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatsift::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let store = ChatStore::new(ScanConfig::new());
//!
//!     for msg in store.search_messages("invoice", false)? {
//!         println!("[{}] {}", msg.short_conversation_id(), msg.text);
//!     }
//!
//!     for (id, conv) in store.get_conversations() {
//!         println!("{id}: {} messages", conv.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`lines`] — [`LineSource`](lines::LineSource): `strings` or in-process
//! - [`extract`] — key markers, look-ahead reconstruction, flattening, fallback
//! - [`store`] — [`ChatStore`](store::ChatStore): scan, dedup, grouping
//! - [`query`] — recency, search, match spans
//! - [`format`] — text / JSON / JSONL / CSV export
//! - [`config`] — [`ExtractConfig`](config::ExtractConfig), [`ScanConfig`](config::ScanConfig)
//! - [`error`] — [`ChatsiftError`], [`Result`]

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod format;
pub mod lines;
pub mod message;
pub mod query;
pub mod store;

// Re-export the main types at the crate root for convenience
pub use error::{ChatsiftError, Result};
pub use message::{ChatMessage, Conversation, MessageType, UNKNOWN_CONVERSATION};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatsift::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ChatsiftError, Result};
    pub use crate::message::{ChatMessage, Conversation, MessageType, UNKNOWN_CONVERSATION};

    pub use crate::config::{ExtractConfig, ScanConfig};
    pub use crate::extract::extract_messages;
    pub use crate::lines::{LineSource, PrintableRuns, StringsCommand};
    pub use crate::store::{ChatStore, dedup_messages, group_conversations};

    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
    pub use crate::query::{highlight, match_spans};
}
