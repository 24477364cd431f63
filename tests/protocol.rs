//! End-to-end tests: a real MCP client talks to the server over an
//! in-memory pipe.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use make_mcp_server::core::{Config, McpServer};
use make_mcp_server::domains::docs::FileDocsSource;
use rmcp::{
    RoleClient, ServiceExt,
    model::{
        CallToolRequestParam, CallToolResult, ClientInfo, RawContent, ReadResourceRequestParam,
        ReadResourceResult, ResourceContents,
    },
    service::RunningService,
};
use serde_json::json;
use tempfile::TempDir;

const DOCS_URI: &str = "makemcp://docs";
const TOOL_NAME: &str = "how_to_make_mcp";

struct Harness {
    client: RunningService<RoleClient, ClientInfo>,
    docs_path: PathBuf,
    _dir: TempDir,
}

async fn start(content: &str) -> Harness {
    let dir = TempDir::new().unwrap();
    let source = FileDocsSource::in_dir(dir.path());
    let docs_path = source.path().to_path_buf();
    fs::write(&docs_path, content).unwrap();

    let server = McpServer::with_docs_source(Config::default(), Arc::new(source));
    let (server_io, client_io) = tokio::io::duplex(64 * 1024);

    tokio::spawn(async move {
        let service = server.serve(server_io).await.expect("server handshake");
        let _ = service.waiting().await;
    });

    let client = ClientInfo::default()
        .serve(client_io)
        .await
        .expect("client handshake");

    Harness {
        client,
        docs_path,
        _dir: dir,
    }
}

fn read_params(uri: &str) -> ReadResourceRequestParam {
    serde_json::from_value(json!({ "uri": uri })).unwrap()
}

fn call_params(name: &str) -> CallToolRequestParam {
    serde_json::from_value(json!({ "name": name })).unwrap()
}

fn resource_text(result: &ReadResourceResult) -> String {
    assert_eq!(result.contents.len(), 1);
    match &result.contents[0] {
        ResourceContents::TextResourceContents { text, .. } => text.clone(),
        _ => panic!("Expected TextResourceContents"),
    }
}

fn tool_text(result: &CallToolResult) -> String {
    assert_eq!(result.content.len(), 1);
    match &result.content[0].raw {
        RawContent::Text(text) => text.text.clone(),
        _ => panic!("Expected text content"),
    }
}

#[tokio::test]
async fn test_lists_one_resource_and_one_tool() {
    let harness = start("# Hello\n").await;

    let resources = harness.client.list_all_resources().await.unwrap();
    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0].raw.uri, DOCS_URI);
    assert_eq!(resources[0].raw.name, "make_mcp");

    let tools = harness.client.list_all_tools().await.unwrap();
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0].name.as_ref(), TOOL_NAME);

    let info = harness.client.peer_info().expect("server info");
    assert_eq!(info.server_info.name, "MakeMCP");

    harness.client.cancel().await.unwrap();
}

#[tokio::test]
async fn test_resource_and_tool_return_identical_text() {
    let harness = start("# Hello\n").await;

    let resource = harness
        .client
        .read_resource(read_params(DOCS_URI))
        .await
        .unwrap();
    let tool = harness.client.call_tool(call_params(TOOL_NAME)).await.unwrap();

    assert!(!tool.is_error.unwrap_or(false));
    assert_eq!(resource_text(&resource), "# Hello\n");
    assert_eq!(tool_text(&tool), "# Hello\n");

    harness.client.cancel().await.unwrap();
}

#[tokio::test]
async fn test_repeated_calls_are_stable() {
    let harness = start("stable content").await;

    let mut seen = Vec::new();
    for _ in 0..3 {
        let resource = harness
            .client
            .read_resource(read_params(DOCS_URI))
            .await
            .unwrap();
        let tool = harness.client.call_tool(call_params(TOOL_NAME)).await.unwrap();
        seen.push(resource_text(&resource));
        seen.push(tool_text(&tool));
    }

    assert!(seen.iter().all(|text| text == "stable content"));

    harness.client.cancel().await.unwrap();
}

#[tokio::test]
async fn test_edits_are_visible_without_restart() {
    let harness = start("old").await;

    fs::write(&harness.docs_path, "new").unwrap();

    let resource = harness
        .client
        .read_resource(read_params(DOCS_URI))
        .await
        .unwrap();
    let tool = harness.client.call_tool(call_params(TOOL_NAME)).await.unwrap();
    assert_eq!(resource_text(&resource), "new");
    assert_eq!(tool_text(&tool), "new");

    harness.client.cancel().await.unwrap();
}

#[tokio::test]
async fn test_missing_docs_fails_only_that_request() {
    let harness = start("# Hello\n").await;

    fs::remove_file(&harness.docs_path).unwrap();

    let resource = harness.client.read_resource(read_params(DOCS_URI)).await;
    assert!(resource.is_err());

    let tool = harness.client.call_tool(call_params(TOOL_NAME)).await.unwrap();
    assert!(tool.is_error.unwrap_or(false));
    assert!(tool_text(&tool).contains("not found"));

    // The server is still alive and recovers once the file is back.
    fs::write(&harness.docs_path, "# Back\n").unwrap();
    let resource = harness
        .client
        .read_resource(read_params(DOCS_URI))
        .await
        .unwrap();
    assert_eq!(resource_text(&resource), "# Back\n");

    harness.client.cancel().await.unwrap();
}

#[tokio::test]
async fn test_unknown_resource_and_tool() {
    let harness = start("# Hello\n").await;

    let resource = harness
        .client
        .read_resource(read_params("makemcp://missing"))
        .await;
    assert!(resource.is_err());

    let tool = harness.client.call_tool(call_params("no_such_tool")).await;
    assert!(tool.is_err());

    harness.client.cancel().await.unwrap();
}
