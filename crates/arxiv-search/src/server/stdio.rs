//! Stdio transport for MCP protocol.
//!
//! Handles JSON-RPC 2.0 over stdin/stdout, one message per line. Tool calls run
//! concurrently so a newer search can cancel an older one; responses are
//! written by a single task in completion order.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::tools::{McpTool, ToolContext};

use super::protocol::{JsonRpcRequest, JsonRpcResponse, McpToolInfo};

/// Handle MCP protocol over the process's stdin/stdout.
pub async fn run_stdio(tools: Vec<Box<dyn McpTool>>, ctx: ToolContext) -> anyhow::Result<()> {
    serve(tokio::io::stdin(), tokio::io::stdout(), tools, ctx).await
}

/// Handle MCP protocol over any line-oriented byte stream pair.
///
/// Returns once `input` reaches EOF and every in-flight call has answered.
pub async fn serve<R, W>(
    input: R,
    output: W,
    tools: Vec<Box<dyn McpTool>>,
    ctx: ToolContext,
) -> anyhow::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let tools = Arc::new(tools);
    let ctx = Arc::new(ctx);
    let (tx, rx) = mpsc::channel::<JsonRpcResponse>(64);
    let writer = tokio::spawn(write_responses(output, rx));
    let mut in_flight = JoinSet::new();

    let mut reader = BufReader::new(input);
    let mut line = String::new();

    tracing::info!("MCP stdio server ready, waiting for requests...");

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;

        if bytes_read == 0 {
            tracing::info!("Stdin closed, shutting down");
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let request: JsonRpcRequest = match serde_json::from_str(trimmed) {
            Ok(req) => req,
            Err(e) => {
                let _ = tx.send(JsonRpcResponse::error(None, -32700, format!("Parse error: {e}"))).await;
                continue;
            }
        };

        tracing::debug!(method = %request.method, "Received request");

        if request.method == "tools/call" {
            let tools = Arc::clone(&tools);
            let ctx = Arc::clone(&ctx);
            let tx = tx.clone();
            in_flight.spawn(async move {
                let response = handle_tools_call(request.id.clone(), &request.params, &tools, &ctx).await;
                if !request.is_notification() {
                    let _ = tx.send(response).await;
                }
            });
        } else if let Some(response) = handle_request(&request, &tools) {
            let _ = tx.send(response).await;
        }

        while let Some(done) = in_flight.try_join_next() {
            if let Err(e) = done {
                tracing::error!(error = %e, "Tool task failed");
            }
        }
    }

    while let Some(done) = in_flight.join_next().await {
        if let Err(e) = done {
            tracing::error!(error = %e, "Tool task failed");
        }
    }

    drop(tx);
    writer.await??;
    Ok(())
}

async fn write_responses<W>(
    mut output: W,
    mut rx: mpsc::Receiver<JsonRpcResponse>,
) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(response) = rx.recv().await {
        let response_json = serde_json::to_string(&response)?;
        output.write_all(response_json.as_bytes()).await?;
        output.write_all(b"\n").await?;
        output.flush().await?;
    }
    Ok(())
}

fn handle_request(req: &JsonRpcRequest, tools: &[Box<dyn McpTool>]) -> Option<JsonRpcResponse> {
    if req.is_notification() {
        tracing::debug!(method = %req.method, "Notification received");
        return None;
    }

    let response = match req.method.as_str() {
        "initialize" => handle_initialize(req.id.clone(), &req.params),
        "tools/list" => handle_tools_list(req.id.clone(), tools),
        "ping" => JsonRpcResponse::success(req.id.clone(), serde_json::json!({})),
        _ => JsonRpcResponse::error(
            req.id.clone(),
            -32601,
            format!("Method not found: {}", req.method),
        ),
    };
    Some(response)
}

fn handle_initialize(id: Option<serde_json::Value>, params: &serde_json::Value) -> JsonRpcResponse {
    let protocol_version = params
        .get("protocolVersion")
        .and_then(|v| v.as_str())
        .unwrap_or("2024-11-05");

    tracing::info!("MCP initialize: protocol version {}", protocol_version);

    JsonRpcResponse::success(
        id,
        serde_json::json!({
            "protocolVersion": protocol_version,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": "arxiv-search",
                "version": env!("CARGO_PKG_VERSION")
            }
        }),
    )
}

fn handle_tools_list(id: Option<serde_json::Value>, tools: &[Box<dyn McpTool>]) -> JsonRpcResponse {
    let tool_list: Vec<McpToolInfo> = tools
        .iter()
        .map(|t| McpToolInfo {
            name: t.name().to_string(),
            description: t.description().to_string(),
            input_schema: t.input_schema(),
        })
        .collect();

    JsonRpcResponse::success(
        id,
        serde_json::json!({
            "tools": tool_list
        }),
    )
}

async fn handle_tools_call(
    id: Option<serde_json::Value>,
    params: &serde_json::Value,
    tools: &[Box<dyn McpTool>],
    ctx: &ToolContext,
) -> JsonRpcResponse {
    let Some(tool_name) = params.get("name").and_then(|v| v.as_str()) else {
        return JsonRpcResponse::error(id, -32602, "Missing 'name' parameter");
    };

    let arguments = params
        .get("arguments")
        .cloned()
        .unwrap_or(serde_json::json!({}));

    let Some(tool) = tools.iter().find(|t| t.name() == tool_name) else {
        return JsonRpcResponse::error(id, -32602, format!("Tool not found: {tool_name}"));
    };

    tracing::info!(tool = %tool_name, "Executing tool");

    match tool.execute(ctx, arguments).await {
        Ok(result) => JsonRpcResponse::success(
            id,
            serde_json::json!({
                "content": [{
                    "type": "text",
                    "text": result
                }]
            }),
        ),
        Err(e) => {
            if e.rpc_code() == -32800 {
                tracing::debug!(tool = %tool_name, "Tool call superseded");
            } else {
                tracing::error!(tool = %tool_name, error = %e, "Tool execution failed");
            }
            JsonRpcResponse::error(id, e.rpc_code(), e.to_user_message())
        }
    }
}
