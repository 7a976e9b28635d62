//! Directory scanning, deduplication and conversation grouping.
//!
//! [`ChatStore`] is the only place where results from different files meet.
//! Every query rebuilds its data from the files on disk; nothing is cached
//! between calls.
//!
//! # Example
//!
//! ```rust,no_run
//! use chatsift::config::ScanConfig;
//! use chatsift::lines::PrintableRuns;
//! use chatsift::store::ChatStore;
//!
//! let store = ChatStore::with_source(
//!     ScanConfig::new().with_storage_dir("/path/to/leveldb"),
//!     PrintableRuns::new(),
//! );
//!
//! for msg in store.get_recent_messages(20) {
//!     println!("[{}] {}", msg.short_conversation_id(), msg.text);
//! }
//! # Ok::<(), chatsift::ChatsiftError>(())
//! ```

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::config::ScanConfig;
use crate::error::Result;
use crate::extract::extract_messages;
use crate::lines::{LineSource, StringsCommand, lines_or_empty};
use crate::message::{ChatMessage, Conversation};
use crate::query;

/// Recovers messages from a storage directory.
pub struct ChatStore {
    config: ScanConfig,
    source: Box<dyn LineSource>,
}

impl ChatStore {
    /// Creates a store that reads files through the `strings` utility.
    pub fn new(config: ScanConfig) -> Self {
        Self::with_source(config, StringsCommand::new())
    }

    /// Creates a store with a custom line source.
    pub fn with_source(config: ScanConfig, source: impl LineSource + 'static) -> Self {
        Self {
            config,
            source: Box::new(source),
        }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Lists the storage files in aggregate order.
    ///
    /// Files are grouped by extension in configured order and sorted by
    /// name within each group. A missing directory yields no files.
    pub fn storage_files(&self) -> Vec<PathBuf> {
        let dir = &self.config.storage_dir;
        if !dir.is_dir() {
            tracing::info!(dir = %dir.display(), "storage directory not found");
            return Vec::new();
        }

        let mut files = Vec::new();
        for ext in &self.config.extensions {
            files.extend(
                WalkDir::new(dir)
                    .min_depth(1)
                    .max_depth(1)
                    .sort_by_file_name()
                    .into_iter()
                    .filter_map(|entry| entry.ok())
                    .filter(|entry| entry.file_type().is_file())
                    .filter(|entry| {
                        entry.path().extension().and_then(|e| e.to_str()) == Some(ext.as_str())
                    })
                    .map(|entry| entry.into_path()),
            );
        }
        files
    }

    /// Extracts messages from a single file. Never fails.
    pub fn extract_file(&self, path: &Path) -> Vec<ChatMessage> {
        let lines = lines_or_empty(self.source.as_ref(), path);
        let messages = extract_messages(&lines, &self.config.extract);
        tracing::debug!(
            path = %path.display(),
            lines = lines.len(),
            messages = messages.len(),
            "extracted storage file"
        );
        messages
    }

    /// Concatenates every file's messages in aggregate order, duplicates included.
    pub fn scan(&self) -> Vec<ChatMessage> {
        let files = self.storage_files();

        let per_file = self.extract_files(&files);

        let messages: Vec<ChatMessage> = per_file.into_iter().flatten().collect();
        tracing::info!(
            files = files.len(),
            messages = messages.len(),
            "scanned storage directory"
        );
        messages
    }

    /// Per-file results in the order of `files`.
    #[cfg(feature = "parallel")]
    fn extract_files(&self, files: &[PathBuf]) -> Vec<Vec<ChatMessage>> {
        if self.config.parallel {
            files.par_iter().map(|path| self.extract_file(path)).collect()
        } else {
            files.iter().map(|path| self.extract_file(path)).collect()
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn extract_files(&self, files: &[PathBuf]) -> Vec<Vec<ChatMessage>> {
        if self.config.parallel {
            tracing::debug!("built without the parallel feature, scanning sequentially");
        }
        files.iter().map(|path| self.extract_file(path)).collect()
    }

    /// All recovered messages, deduplicated, in aggregate order.
    pub fn get_all_messages(&self) -> Vec<ChatMessage> {
        dedup_messages(self.scan())
    }

    /// Messages grouped by conversation id.
    pub fn get_conversations(&self) -> BTreeMap<String, Conversation> {
        group_conversations(self.get_all_messages())
    }

    /// Messages whose text contains `query`. See [`query::search`].
    pub fn search_messages(&self, query: &str, case_sensitive: bool) -> Result<Vec<ChatMessage>> {
        query::search(&self.get_all_messages(), query, case_sensitive)
    }

    /// The last `limit` messages in aggregate order. See [`query::recent`].
    pub fn get_recent_messages(&self, limit: usize) -> Vec<ChatMessage> {
        query::recent(&self.get_all_messages(), limit)
    }
}

/// Removes repeated `(conversation_id, text)` pairs. First occurrence wins.
///
/// ```
/// use chatsift::ChatMessage;
/// use chatsift::store::dedup_messages;
///
/// let deduped = dedup_messages(vec![
///     ChatMessage::draft("a", "hello there"),
///     ChatMessage::new("a", "hello there"),
///     ChatMessage::new("b", "hello there"),
/// ]);
/// assert_eq!(deduped.len(), 2);
/// assert!(deduped[0].is_draft);
/// ```
pub fn dedup_messages(messages: Vec<ChatMessage>) -> Vec<ChatMessage> {
    let keep: Vec<bool> = {
        let mut seen = HashSet::with_capacity(messages.len());
        messages.iter().map(|msg| seen.insert(msg.dedup_key())).collect()
    };
    messages
        .into_iter()
        .zip(keep)
        .filter_map(|(msg, first)| first.then_some(msg))
        .collect()
}

/// Groups messages by conversation id, keeping arrival order within each group.
pub fn group_conversations(messages: Vec<ChatMessage>) -> BTreeMap<String, Conversation> {
    let mut conversations: BTreeMap<String, Conversation> = BTreeMap::new();
    for msg in messages {
        conversations
            .entry(msg.conversation_id.clone())
            .or_insert_with_key(|id| Conversation::new(id.clone()))
            .messages
            .push(msg);
    }
    conversations
}
