//! Turning binary storage files into printable lines.
//!
//! The storage format is never parsed. Instead every file is reduced to the
//! printable substrings it contains, and the extraction heuristics run over
//! those. [`LineSource`] is the seam for that reduction:
//!
//! - [`StringsCommand`] shells out to the `strings` utility
//! - [`PrintableRuns`] does the same job in-process
//!
//! Callers that scan whole directories should go through [`lines_or_empty`],
//! which turns any failure into an empty sequence so one bad file cannot
//! abort a scan.

use std::fs;
use std::path::Path;
use std::process::Command;

use crate::error::{ChatsiftError, Result};

/// Produces the printable lines of one storage file.
pub trait LineSource: Send + Sync {
    /// Human-readable name of this source, used in log events.
    fn name(&self) -> &'static str;

    /// Returns the printable lines found in `path`, in file order.
    fn extract_lines(&self, path: &Path) -> Result<Vec<String>>;
}

/// Runs an external `strings`-compatible program on each file.
#[derive(Debug, Clone)]
pub struct StringsCommand {
    program: String,
}

impl StringsCommand {
    pub fn new() -> Self {
        Self::with_program("strings")
    }

    /// Uses a different executable, e.g. `gstrings` or an absolute path.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for StringsCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for StringsCommand {
    fn name(&self) -> &'static str {
        "strings"
    }

    fn extract_lines(&self, path: &Path) -> Result<Vec<String>> {
        let output = Command::new(&self.program)
            .arg(path)
            .output()
            .map_err(|e| {
                ChatsiftError::extraction(path, format!("failed to run {}: {e}", self.program))
            })?;

        if !output.status.success() {
            return Err(ChatsiftError::extraction(
                path,
                format!("{} exited with {}", self.program, output.status),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout)
            .split('\n')
            .map(str::to_string)
            .collect())
    }
}

/// In-process equivalent of `strings`.
///
/// Splits the file on control bytes (everything below `0x20` except tab,
/// plus `0x7F`) and keeps runs of at least `min_len` characters. Unlike the
/// classic utility, bytes above `0x7F` stay inside a run, so UTF-8 text
/// survives; invalid sequences decode to U+FFFD.
#[derive(Debug, Clone, Copy)]
pub struct PrintableRuns {
    min_len: usize,
}

impl PrintableRuns {
    pub fn new() -> Self {
        Self { min_len: 4 }
    }

    #[must_use]
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    /// Splits raw bytes into printable runs.
    pub fn runs(&self, bytes: &[u8]) -> Vec<String> {
        bytes
            .split(|&b| is_separator(b))
            .filter(|run| !run.is_empty())
            .map(String::from_utf8_lossy)
            .filter(|run| run.chars().count() >= self.min_len)
            .map(|run| run.into_owned())
            .collect()
    }
}

impl Default for PrintableRuns {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for PrintableRuns {
    fn name(&self) -> &'static str {
        "builtin"
    }

    fn extract_lines(&self, path: &Path) -> Result<Vec<String>> {
        let bytes = fs::read(path)?;
        Ok(self.runs(&bytes))
    }
}

fn is_separator(b: u8) -> bool {
    (b < 0x20 && b != b'\t') || b == 0x7F
}

/// Extracts lines, mapping any failure to an empty sequence.
pub fn lines_or_empty(source: &dyn LineSource, path: &Path) -> Vec<String> {
    match source.extract_lines(path) {
        Ok(lines) => lines,
        Err(err) => {
            tracing::warn!(
                source = source.name(),
                path = %path.display(),
                error = %err,
                "skipping unreadable storage file"
            );
            Vec::new()
        }
    }
}
