//! End-to-end CLI tests for chatsift.
//!
//! Every test runs the binary with `--builtin` against a temporary storage
//! directory, so no external `strings` program is needed.
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

fn storage_bytes(records: &[&str]) -> Vec<u8> {
    let mut bytes = vec![0x00];
    for record in records {
        bytes.extend_from_slice(record.as_bytes());
        bytes.extend_from_slice(&[0x00, 0x01]);
    }
    bytes
}

/// A storage directory with two drafts and some loose fragments.
fn setup_store() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    fs::write(
        dir.path().join("000003.ldb"),
        storage_bytes(&[
            "LSS-3f2a9c1e-77aa-4b1c:textInput",
            r#"{"type":"doc","content":[{"type":"paragraph","content":[{"type":"text","text":"Remember the Hello World demo"}]}]}"#,
            "LSS-9b8c7d6e-1111:textInput",
            r#"{"type":"doc","content":[{"type":"text","text":"Second draft"}]}"#,
        ]),
    )
    .unwrap();

    fs::write(
        dir.path().join("000007.log"),
        storage_bytes(&[
            r#"{"role":"user","text":"say hello now please"}"#,
            r#"{"role":"user","text":"unrelated question here"}"#,
        ]),
    )
    .unwrap();

    dir
}

fn chatsift_cmd(dir: &Path) -> Command {
    let mut cmd = Command::from_std(std::process::Command::new(env!("CARGO_BIN_EXE_chatsift")));
    cmd.arg("--builtin").arg("--dir").arg(dir);
    cmd
}

// ============================================================================
// list
// ============================================================================

mod list {
    use super::*;

    #[test]
    fn test_list_recent() {
        let store = setup_store();
        chatsift_cmd(store.path())
            .args(["list", "-n", "2"])
            .assert()
            .success()
            .stdout(predicate::str::contains(" 1. 💬 [unknown] say hello now please"))
            .stdout(predicate::str::contains(" 2. 💬 [unknown] unrelated question here"))
            .stdout(predicate::str::contains("Second draft").not());
    }

    #[test]
    fn test_list_conversation() {
        let store = setup_store();
        chatsift_cmd(store.path())
            .args(["list", "-c", "9b8c7d6e-1111"])
            .assert()
            .success()
            .stdout(predicate::str::contains("📝 [9b8c7d6e] Second draft"));
    }

    #[test]
    fn test_list_unknown_conversation() {
        let store = setup_store();
        chatsift_cmd(store.path())
            .args(["list", "-c", "nope"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Conversation 'nope' not found."));
    }

    #[test]
    fn test_list_missing_directory() {
        let store = setup_store();
        chatsift_cmd(&store.path().join("absent"))
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("No messages found."));
    }

    #[test]
    fn test_list_zero_limit_is_empty() {
        let store = setup_store();
        chatsift_cmd(store.path())
            .args(["list", "-n", "0"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No messages found."));
    }
}

// ============================================================================
// search
// ============================================================================

mod search {
    use super::*;

    #[test]
    fn test_search_highlights_all_cases() {
        let store = setup_store();
        chatsift_cmd(store.path())
            .args(["search", "hello"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Remember the **Hello** World demo"))
            .stdout(predicate::str::contains("say **hello** now please"));
    }

    #[test]
    fn test_search_case_sensitive() {
        let store = setup_store();
        chatsift_cmd(store.path())
            .args(["search", "Hello", "--case-sensitive"])
            .assert()
            .success()
            .stdout(predicate::str::contains("**Hello** World"))
            .stdout(predicate::str::contains("say hello now").not());
    }

    #[test]
    fn test_search_limit_notice() {
        let store = setup_store();
        chatsift_cmd(store.path())
            .args(["search", "hello", "-n", "1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Showing first 1 of"));
    }

    #[test]
    fn test_search_no_results() {
        let store = setup_store();
        chatsift_cmd(store.path())
            .args(["search", "zebra"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No messages found containing 'zebra'."));
    }
}

// ============================================================================
// conversations / export
// ============================================================================

#[test]
fn test_conversations() {
    let store = setup_store();
    chatsift_cmd(store.path())
        .arg("conversations")
        .assert()
        .success()
        .stdout(predicate::str::contains("3f2a9c1e-77aa-4b1c: 1 messages (1 drafts)"))
        .stdout(predicate::str::contains("9b8c7d6e-1111: 1 messages (1 drafts)"))
        .stdout(predicate::str::contains("unknown:"));
}

#[test]
fn test_export_json_to_stdout() {
    let store = setup_store();
    let output = chatsift_cmd(store.path())
        .args(["export", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = parsed.as_array().unwrap();
    assert_eq!(records[0]["conversation_id"], "3f2a9c1e-77aa-4b1c");
    assert_eq!(records[0]["text"], "Remember the Hello World demo");
    assert_eq!(records[0]["is_draft"], true);
    assert_eq!(records[0]["message_type"], "user");
}

#[test]
fn test_export_to_file() {
    let store = setup_store();
    let out = tempdir().unwrap();
    let path = out.path().join("messages.jsonl");

    chatsift_cmd(store.path())
        .args(["export", "-f", "jsonl", "-o"])
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Exported"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.lines().count() >= 4);
    assert!(content.contains("unrelated question here"));
}

#[test]
fn test_help() {
    Command::from_std(std::process::Command::new(env!("CARGO_BIN_EXE_chatsift")))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("export"));
}
