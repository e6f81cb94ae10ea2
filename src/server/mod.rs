//! Line-oriented JSON-RPC 2.0 server over stdin/stdout.
//!
//! One JSON object per line in each direction. Requests without an id are
//! notifications and get no reply. Logging goes to stderr so stdout stays a
//! clean protocol stream.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};
use tracing::{debug, info, warn};

use crate::error::PlannerError;
use crate::tools::FunctionFactory;

pub const PROTOCOL_VERSION: &str = "2024-11-05";

const DEFAULT_SERVER_NAME: &str = "events-planner-mcp";

const PARSE_ERROR: i32 = -32700;
const METHOD_NOT_FOUND: i32 = -32601;
const INVALID_PARAMS: i32 = -32602;

/// JSON-RPC 2.0 request envelope. `id` is absent for notifications.
#[derive(Debug, Deserialize)]
pub struct RpcRequest {
    #[allow(dead_code)]
    jsonrpc: String,
    id: Option<Value>,
    method: String,
    params: Option<Value>,
}

/// JSON-RPC 2.0 response envelope
#[derive(Debug, Serialize)]
pub struct RpcResponse {
    jsonrpc: &'static str,
    id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<RpcError>,
}

/// JSON-RPC 2.0 error object
#[derive(Debug, Serialize)]
pub struct RpcError {
    code: i32,
    message: String,
}

impl RpcResponse {
    fn result(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(RpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

/// Parameters of a tools/call request
#[derive(Debug, Deserialize)]
struct ToolCall {
    name: String,
    #[serde(default)]
    arguments: Option<Value>,
}

/// Stdio server fronting the planner tools
pub struct PlannerServer {
    name: String,
    version: String,
    factory: FunctionFactory,
}

impl PlannerServer {
    pub fn new(factory: FunctionFactory) -> Self {
        Self {
            name: DEFAULT_SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            factory,
        }
    }

    /// Override the advertised server name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Serve requests from stdin until it closes
    pub async fn run(&self) -> std::io::Result<()> {
        let stdin = tokio::io::stdin();
        let mut lines = BufReader::with_capacity(8192, stdin).lines();
        let stdout = tokio::io::stdout();
        let mut stdout = BufWriter::with_capacity(8192, stdout);

        info!(name = %self.name, version = %self.version, "serving tools over stdio");

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            let Some(response) = self.handle_line(&line).await else {
                continue;
            };

            let body = match serde_json::to_string(&response) {
                Ok(body) => body,
                Err(err) => {
                    warn!("failed to serialize response: {err}");
                    continue;
                }
            };

            stdout.write_all(body.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }

        Ok(())
    }

    /// Handle one request line. Returns `None` when no reply is owed: the
    /// line was a notification, or it was unparseable with no recoverable id.
    pub async fn handle_line(&self, line: &str) -> Option<RpcResponse> {
        let request: RpcRequest = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(err) => {
                warn!("discarding unparseable request: {err}");
                let id = serde_json::from_str::<Value>(line)
                    .ok()
                    .and_then(|value| value.get("id").cloned())?;
                return Some(RpcResponse::error(
                    Some(id),
                    PARSE_ERROR,
                    format!("Parse error: {err}"),
                ));
            }
        };

        if request.id.is_none() {
            debug!(method = %request.method, "notification consumed");
            return None;
        }

        Some(self.dispatch(request).await)
    }

    async fn dispatch(&self, request: RpcRequest) -> RpcResponse {
        let RpcRequest {
            id, method, params, ..
        } = request;

        match method.as_str() {
            "initialize" => self.handle_initialize(id),
            "tools/list" => self.handle_tools_list(id),
            "tools/call" => self.handle_tools_call(id, params).await,
            other => RpcResponse::error(id, METHOD_NOT_FOUND, format!("Method not found: {other}")),
        }
    }

    fn handle_initialize(&self, id: Option<Value>) -> RpcResponse {
        RpcResponse::result(
            id,
            json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": self.name,
                    "version": self.version
                }
            }),
        )
    }

    fn handle_tools_list(&self, id: Option<Value>) -> RpcResponse {
        RpcResponse::result(id, json!({ "tools": self.factory.describe_tools() }))
    }

    async fn handle_tools_call(&self, id: Option<Value>, params: Option<Value>) -> RpcResponse {
        let Some(params) = params else {
            return RpcResponse::error(id, INVALID_PARAMS, "Invalid params");
        };

        let call: ToolCall = match serde_json::from_value(params) {
            Ok(call) => call,
            Err(err) => {
                return RpcResponse::error(id, INVALID_PARAMS, format!("Invalid params: {err}"));
            }
        };

        let arguments = call.arguments.unwrap_or_else(|| json!({}));

        match self.factory.execute_function(&call.name, arguments).await {
            Ok(payload) => tool_result(id, &payload, false),
            Err(PlannerError::ToolNotFound(name)) => {
                RpcResponse::error(id, METHOD_NOT_FOUND, format!("Unknown tool: {name}"))
            }
            Err(err) => {
                warn!(code = err.error_code(), "tool call failed: {err}");
                tool_result(id, &err.to_error_payload(), true)
            }
        }
    }
}

/// Wrap a tool payload as tools/call result content. Error payloads ride in
/// the same shape with `isError` set.
fn tool_result(id: Option<Value>, payload: &Value, is_error: bool) -> RpcResponse {
    RpcResponse::result(
        id,
        json!({
            "content": [
                {
                    "type": "text",
                    "text": payload.to_string()
                }
            ],
            "isError": is_error
        }),
    )
}
