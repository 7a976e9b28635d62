//! Command-line interface definition using clap.
//!
//! - [`Args`] - global options and the chosen [`Command`]
//! - [`ExportFormat`] - export formats accepted on the command line

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::ScanConfig;
use crate::format::OutputFormat;
use crate::lines::{PrintableRuns, StringsCommand};
use crate::store::ChatStore;

/// Recover chat messages and unsent drafts from the desktop app's
/// Local Storage.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatsift")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatsift list -n 10
    chatsift list -c 3f2a9c1e-77aa-4b1c-9e1d-2b5f0c8a1d44
    chatsift search \"meeting notes\" --case-sensitive
    chatsift conversations
    chatsift export -f json -o messages.json
    chatsift --dir ./leveldb-copy --builtin list")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Storage directory (default: the app's Local Storage leveldb folder)
    #[arg(long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Extract strings in-process instead of running `strings`
    #[arg(long, global = true)]
    pub builtin: bool,

    /// Program used to extract strings
    #[arg(long, global = true, value_name = "PROGRAM", default_value = "strings")]
    pub strings_program: String,

    /// Extract files on worker threads
    #[arg(long, global = true)]
    pub parallel: bool,

    /// Log skipped candidates and per-file counts (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List recent chat messages
    List {
        /// Number of messages to show
        #[arg(short = 'n', long, default_value_t = 20)]
        limit: usize,

        /// Show every message of one conversation instead
        #[arg(short, long, value_name = "ID")]
        conversation: Option<String>,
    },

    /// Search chat messages for text
    Search {
        query: String,

        /// Case sensitive search
        #[arg(short, long)]
        case_sensitive: bool,

        /// Maximum results to show
        #[arg(short = 'n', long, default_value_t = 50)]
        limit: usize,
    },

    /// List all conversation ids
    Conversations,

    /// Export all chat messages
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ExportFormat,

        /// Output file (default: stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

/// Export formats accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    #[value(alias = "txt")]
    Text,
    Json,
    #[value(alias = "ndjson")]
    Jsonl,
    Csv,
}

impl From<ExportFormat> for OutputFormat {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Text => OutputFormat::Text,
            ExportFormat::Json => OutputFormat::Json,
            ExportFormat::Jsonl => OutputFormat::Jsonl,
            ExportFormat::Csv => OutputFormat::Csv,
        }
    }
}

impl Args {
    /// Scan configuration derived from the global options.
    pub fn scan_config(&self) -> ScanConfig {
        let config = ScanConfig::new().with_parallel(self.parallel);
        match &self.dir {
            Some(dir) => config.with_storage_dir(dir),
            None => config,
        }
    }

    /// Builds the store with the selected line source.
    pub fn build_store(&self) -> ChatStore {
        if self.builtin {
            ChatStore::with_source(self.scan_config(), PrintableRuns::new())
        } else {
            ChatStore::with_source(
                self.scan_config(),
                StringsCommand::with_program(&self.strings_program),
            )
        }
    }

    /// Log filter directive for the `-v` count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
