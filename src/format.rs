//! Export formats for recovered messages.
//!
//! # Example
//!
//! ```rust
//! use chatsift::format::{OutputFormat, to_format_string};
//! use chatsift::ChatMessage;
//!
//! let messages = vec![ChatMessage::draft("3f2a9c1e-77aa", "unsent draft")];
//!
//! let text = to_format_string(&messages, OutputFormat::Text)?;
//! assert_eq!(text, "📝 [3f2a9c1e] unsent draft\n");
//!
//! let format: OutputFormat = "ndjson".parse().unwrap();
//! assert_eq!(format, OutputFormat::Jsonl);
//! # Ok::<(), chatsift::ChatsiftError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChatsiftError, Result};
use crate::message::{ChatMessage, MessageType};

/// Output format for exports.
///
/// - [`Text`](OutputFormat::Text) - one line per message with a draft marker
/// - [`Json`](OutputFormat::Json) - pretty-printed array
/// - [`Jsonl`](OutputFormat::Jsonl) - one JSON object per line
/// - [`Csv`](OutputFormat::Csv) - semicolon-delimited (requires `csv-output`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Jsonl,
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "txt", "json", "jsonl", "ndjson", "csv"]
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Flat export record. Timestamps are never recovered, so they are not exported.
#[derive(Serialize)]
struct ExportRecord<'a> {
    conversation_id: &'a str,
    text: &'a str,
    is_draft: bool,
    message_type: MessageType,
}

impl<'a> From<&'a ChatMessage> for ExportRecord<'a> {
    fn from(msg: &'a ChatMessage) -> Self {
        Self {
            conversation_id: &msg.conversation_id,
            text: &msg.text,
            is_draft: msg.is_draft,
            message_type: msg.message_type,
        }
    }
}

/// Status marker shown in front of a message: 📝 for drafts, 💬 otherwise.
pub fn status_marker(msg: &ChatMessage) -> &'static str {
    if msg.is_draft { "📝" } else { "💬" }
}

/// Renders one message as a text line, without trailing newline.
pub fn text_line(msg: &ChatMessage) -> String {
    format!(
        "{} [{}] {}",
        status_marker(msg),
        msg.short_conversation_id(),
        msg.text
    )
}

/// Converts messages to a string in the given format.
pub fn to_format_string(messages: &[ChatMessage], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(messages
            .iter()
            .map(|m| text_line(m) + "\n")
            .collect()),
        OutputFormat::Json => {
            let records: Vec<ExportRecord<'_>> = messages.iter().map(ExportRecord::from).collect();
            Ok(serde_json::to_string_pretty(&records)?)
        }
        OutputFormat::Jsonl => {
            let mut out = String::new();
            for msg in messages {
                out.push_str(&serde_json::to_string(&ExportRecord::from(msg))?);
                out.push('\n');
            }
            Ok(out)
        }
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => to_csv(messages),
        #[allow(unreachable_patterns)]
        _ => Err(ChatsiftError::invalid_format(
            "output",
            format!("{format} output requires the 'csv-output' feature to be enabled"),
        )),
    }
}

/// Writes messages to a file in the given format.
pub fn write_to_format(messages: &[ChatMessage], path: &Path, format: OutputFormat) -> Result<()> {
    let content = to_format_string(messages, format)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(feature = "csv-output")]
fn to_csv(messages: &[ChatMessage]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    writer.write_record(["ConversationId", "Draft", "Type", "Text"])?;
    for msg in messages {
        writer.write_record([
            msg.conversation_id.as_str(),
            if msg.is_draft { "true" } else { "false" },
            msg.message_type.to_string().as_str(),
            msg.text.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ChatsiftError::Io(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
