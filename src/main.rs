//! # chatsift CLI
//!
//! Command-line interface for the chatsift library.

use std::io::{self, Write};
use std::process;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatsift::cli::{Args, Command};
use chatsift::format::{OutputFormat, status_marker, to_format_string, write_to_format};
use chatsift::query::{highlight, match_spans};
use chatsift::store::ChatStore;
use chatsift::{ChatMessage, ChatsiftError};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(&args);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing(args: &Args) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("chatsift={}", args.log_level())));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), ChatsiftError> {
    let store = args.build_store();

    match &args.command {
        Command::List {
            limit,
            conversation,
        } => list(&store, *limit, conversation.as_deref()),
        Command::Search {
            query,
            case_sensitive,
            limit,
        } => search(&store, query, *case_sensitive, *limit),
        Command::Conversations => conversations(&store),
        Command::Export { format, output } => {
            let messages = store.get_all_messages();
            let format: OutputFormat = (*format).into();
            match output {
                Some(path) => {
                    write_to_format(&messages, path, format)?;
                    eprintln!("✅ Exported {} messages to {}", messages.len(), path.display());
                }
                None => {
                    let mut stdout = io::stdout().lock();
                    stdout.write_all(to_format_string(&messages, format)?.as_bytes())?;
                }
            }
            Ok(())
        }
    }
}

fn list(store: &ChatStore, limit: usize, conversation: Option<&str>) -> Result<(), ChatsiftError> {
    let messages = match conversation {
        Some(id) => match store.get_conversations().remove(id) {
            Some(conv) => conv.messages,
            None => {
                println!("Conversation '{}' not found.", id);
                return Ok(());
            }
        },
        None => store.get_recent_messages(limit),
    };

    if messages.is_empty() {
        println!("No messages found.");
        return Ok(());
    }

    for (i, msg) in messages.iter().enumerate() {
        print_message(i + 1, msg, &msg.text);
    }
    Ok(())
}

fn search(
    store: &ChatStore,
    query: &str,
    case_sensitive: bool,
    limit: usize,
) -> Result<(), ChatsiftError> {
    let results = store.search_messages(query, case_sensitive)?;

    if results.is_empty() {
        println!("No messages found containing '{}'.", query);
        return Ok(());
    }

    if results.len() > limit {
        println!("Showing first {} of {} results:", limit, results.len());
    }

    for (i, msg) in results.iter().take(limit).enumerate() {
        let spans = match_spans(&msg.text, query, case_sensitive)?;
        print_message(i + 1, msg, &highlight(&msg.text, &spans, "**", "**"));
    }
    Ok(())
}

fn conversations(store: &ChatStore) -> Result<(), ChatsiftError> {
    let convs = store.get_conversations();

    if convs.is_empty() {
        println!("No conversations found.");
        return Ok(());
    }

    println!("Found {} conversations:", convs.len());
    for (id, conv) in &convs {
        println!(
            "  {}: {} messages ({} drafts)",
            id,
            conv.len(),
            conv.draft_count()
        );
    }
    Ok(())
}

fn print_message(index: usize, msg: &ChatMessage, text: &str) {
    println!(
        "{:2}. {} [{}] {}",
        index,
        status_marker(msg),
        msg.short_conversation_id(),
        text
    );
}
