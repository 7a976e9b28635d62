//! Unified error types for chatsift.
//!
//! This module provides a single [`ChatsiftError`] enum that covers all error
//! cases in the library.
//!
//! # Error Handling Philosophy
//!
//! Recovery is best-effort. Most things that go wrong while reading the
//! storage directory are *not* errors from the caller's point of view:
//!
//! - a missing storage directory yields an empty result
//! - a file the line source cannot read contributes nothing
//! - a malformed draft candidate is dropped
//! - text below the noise floor is dropped
//!
//! The variants below surface only where a caller can act on them: the
//! [`LineSource`](crate::lines::LineSource) seam (which the store then
//! swallows), query preconditions, and export I/O.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatsift operations.
///
/// # Example
///
/// ```rust
/// use chatsift::error::Result;
/// use chatsift::ChatMessage;
///
/// fn my_function() -> Result<Vec<ChatMessage>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatsiftError>;

/// The error type for all chatsift operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatsiftError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - A storage file disappears between listing and reading
    /// - Permission denied
    /// - The export destination cannot be written
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The line source could not turn a storage file into lines.
    ///
    /// The store never propagates this: the file simply contributes no
    /// messages. It is visible to callers that drive a
    /// [`LineSource`](crate::lines::LineSource) directly.
    #[error("Failed to extract strings from {}: {message}", path.display())]
    Extraction {
        /// The storage file being read
        path: PathBuf,
        /// Description of the failure
        message: String,
    },

    /// A query was called with an argument outside its domain.
    #[error("Invalid argument '{name}': {message}")]
    InvalidArgument {
        /// Name of the offending parameter
        name: &'static str,
        /// Description of the constraint that was violated
        message: String,
    },

    /// An unknown or unsupported format name.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The kind of format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatsiftError {
    /// Creates an extraction error for a storage file.
    pub fn extraction(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ChatsiftError::Extraction {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid argument error.
    pub fn invalid_argument(name: &'static str, message: impl Into<String>) -> Self {
        ChatsiftError::InvalidArgument {
            name,
            message: message.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatsiftError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatsiftError::Io(_))
    }

    /// Returns `true` if this is an extraction error.
    pub fn is_extraction(&self) -> bool {
        matches!(self, ChatsiftError::Extraction { .. })
    }

    /// Returns `true` if this is an invalid argument error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ChatsiftError::InvalidArgument { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatsiftError::InvalidFormat { .. })
    }
}
