//! Process-level tests for startup, shutdown and the installed docs file.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

const INITIALIZE: &str = r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","capabilities":{},"clientInfo":{"name":"cli-test","version":"0.0.0"}}}"#;
const INITIALIZED: &str = r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#;
const READ_DOCS: &str = r#"{"jsonrpc":"2.0","id":2,"method":"resources/read","params":{"uri":"makemcp://docs"}}"#;
const CALL_TOOL: &str = r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"how_to_make_mcp","arguments":{}}}"#;

const REPO_DOCS: &str = include_str!("../docs.md");

fn server() -> Command {
    let mut cmd = Command::cargo_bin("make_mcp_server").unwrap();
    cmd.env("MCP_LOG_LEVEL", "info")
        .env("MCP_SERVER_NAME", "MakeMCP");
    cmd
}

fn response(stdout: &[u8], id: u64) -> Value {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter_map(|line| serde_json::from_str::<Value>(line).ok())
        .find(|message| message["id"] == id)
        .unwrap_or_else(|| panic!("no response with id {id}"))
}

#[test]
fn test_startup_failure_exits_with_status_one() {
    // The client hangs up before sending initialize, so the session is never
    // established and the server reports an initialization error.
    server()
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error running server"));
}

#[test]
fn test_clean_shutdown_after_handshake() {
    server()
        .write_stdin(format!("{INITIALIZE}\n{INITIALIZED}\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name":"MakeMCP""#))
        .stdout(predicate::str::contains("makemcp://docs"));
}

#[test]
fn test_built_binary_serves_repository_docs() {
    let output = server()
        .write_stdin(format!(
            "{INITIALIZE}\n{INITIALIZED}\n{READ_DOCS}\n{CALL_TOOL}\n"
        ))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let read = response(&output, 2);
    assert_eq!(read["result"]["contents"][0]["uri"], "makemcp://docs");
    assert_eq!(read["result"]["contents"][0]["text"], REPO_DOCS);

    let call = response(&output, 3);
    assert_ne!(call["result"]["isError"], true);
    assert_eq!(call["result"]["content"][0]["text"], REPO_DOCS);
}
