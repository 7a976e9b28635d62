//! Configuration types for extraction and scanning.
//!
//! - [`ExtractConfig`] - knobs of the per-file extraction heuristics
//! - [`ScanConfig`] - which directory and files to scan, and how
//!
//! Both are plain serde structs with builder methods and no CLI framework
//! dependency.
//!
//! # Example
//!
//! ```rust
//! use chatsift::config::{ExtractConfig, ScanConfig};
//!
//! let config = ScanConfig::new()
//!     .with_storage_dir("/tmp/leveldb")
//!     .with_parallel(true)
//!     .with_extract(ExtractConfig::new().with_max_lookahead(6));
//!
//! assert_eq!(config.extract.max_lookahead, 6);
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Heuristics used when turning one file's lines into messages.
///
/// Length thresholds are exclusive lower bounds counted in characters: a
/// draft survives only when it is longer than `min_draft_len`, a fallback
/// capture only when longer than `min_fallback_len`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Namespace prefix of key-marker lines (default: `LSS-`)
    pub key_prefix: String,

    /// Ends the conversation id inside a key marker (default: `:`)
    pub key_delimiter: char,

    /// Field tag identifying a draft-input record (default: `textInput`)
    pub draft_tag: String,

    /// Required head of a reconstructed draft document
    pub doc_root: String,

    /// Maximum number of successor lines joined into one candidate (default: 10)
    pub max_lookahead: usize,

    /// Flattened drafts of this many characters or fewer are dropped (default: 3)
    pub min_draft_len: usize,

    /// Fallback captures of this many characters or fewer are dropped (default: 10)
    pub min_fallback_len: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            key_prefix: "LSS-".to_string(),
            key_delimiter: ':',
            draft_tag: "textInput".to_string(),
            doc_root: r#"{"type":"doc""#.to_string(),
            max_lookahead: 10,
            min_draft_len: 3,
            min_fallback_len: 10,
        }
    }
}

impl ExtractConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the key-marker namespace prefix.
    #[must_use]
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    /// Sets the field tag that marks draft input records.
    #[must_use]
    pub fn with_draft_tag(mut self, tag: impl Into<String>) -> Self {
        self.draft_tag = tag.into();
        self
    }

    /// Sets the look-ahead window size.
    #[must_use]
    pub fn with_max_lookahead(mut self, lines: usize) -> Self {
        self.max_lookahead = lines;
        self
    }

    /// Sets the draft noise floor.
    #[must_use]
    pub fn with_min_draft_len(mut self, len: usize) -> Self {
        self.min_draft_len = len;
        self
    }

    /// Sets the fallback noise floor.
    #[must_use]
    pub fn with_min_fallback_len(mut self, len: usize) -> Self {
        self.min_fallback_len = len;
        self
    }
}

/// Which storage files to read and how to combine them.
///
/// Files are visited extension by extension, in the order of `extensions`,
/// and by file name within one extension. That order is the aggregate
/// order, so it decides which duplicate survives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Directory holding the storage files
    pub storage_dir: PathBuf,

    /// File extensions to scan, without dot (default: `ldb`, `log`)
    pub extensions: Vec<String>,

    /// Extract files on worker threads, merging in traversal order (default: false)
    pub parallel: bool,

    /// Per-file extraction settings
    pub extract: ExtractConfig,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            extensions: vec!["ldb".to_string(), "log".to_string()],
            parallel: false,
            extract: ExtractConfig::default(),
        }
    }
}

impl ScanConfig {
    /// Creates a new configuration pointing at the platform default directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the storage directory.
    #[must_use]
    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir = dir.into();
        self
    }

    /// Replaces the list of scanned extensions.
    #[must_use]
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Enables or disables per-file worker threads.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the extraction settings.
    #[must_use]
    pub fn with_extract(mut self, extract: ExtractConfig) -> Self {
        self.extract = extract;
        self
    }
}

/// Local Storage directory of the desktop app under the platform config dir.
///
/// - macOS: `~/Library/Application Support/Claude/Local Storage/leveldb`
/// - Linux: `~/.config/Claude/Local Storage/leveldb`
/// - Windows: `%APPDATA%\Claude\Local Storage\leveldb`
pub fn default_storage_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_default()
        .join("Claude")
        .join("Local Storage")
        .join("leveldb")
}
