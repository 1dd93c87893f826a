// ABOUTME: Routes JSON-RPC requests to the tool registry and prompt surface.
// ABOUTME: Notifications produce no output; tool-domain failures stay in-band.

use serde_json::{Value, json};
use tracing::{debug, warn};

use super::types::*;
use crate::prompt;
use crate::tool::{Registry, ToolResult};

/// Dispatches decoded requests to handlers and shapes the responses.
pub struct Router {
    registry: Registry,
}

impl Router {
    /// Create a router over a tool registry.
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// Handle one line from the wire. Returns the serialized response, or
    /// None when the input was a notification.
    pub async fn handle_line(&self, line: &str) -> Option<String> {
        let request: RpcRequest = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "unparseable request");
                let response = RpcResponse::failure(
                    Value::Null,
                    RpcErrorObject::new(PARSE_ERROR, format!("Parse error: {e}")),
                );
                return serde_json::to_string(&response).ok();
            }
        };

        let Some(id) = request.id else {
            debug!(method = %request.method, "notification");
            return None;
        };

        if request.jsonrpc != JSONRPC_VERSION {
            let response = RpcResponse::failure(
                id,
                RpcErrorObject::new(INVALID_REQUEST, "Unsupported jsonrpc version"),
            );
            return serde_json::to_string(&response).ok();
        }

        debug!(method = %request.method, "request");
        let response = match self.dispatch(&request.method, request.params).await {
            Ok(result) => RpcResponse::success(id, result),
            Err(error) => RpcResponse::failure(id, error),
        };
        serde_json::to_string(&response).ok()
    }

    async fn dispatch(&self, method: &str, params: Option<Value>) -> Result<Value, RpcErrorObject> {
        match method {
            "initialize" => self.initialize(),
            "ping" => Ok(json!({})),
            "tools/list" => {
                let result = ToolsListResult {
                    tools: self.registry.to_infos().await,
                };
                serde_json::to_value(result).map_err(internal)
            }
            "tools/call" => self.call_tool(params).await,
            "prompts/list" => {
                let result = PromptsListResult {
                    prompts: prompt::list_prompts(),
                };
                serde_json::to_value(result).map_err(internal)
            }
            "prompts/get" => self.get_prompt(params),
            other => Err(RpcErrorObject::new(
                METHOD_NOT_FOUND,
                format!("Method not found: {other}"),
            )),
        }
    }

    fn initialize(&self) -> Result<Value, RpcErrorObject> {
        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(json!({})),
                prompts: Some(json!({})),
            },
            server_info: ServerInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };
        serde_json::to_value(result).map_err(internal)
    }

    async fn call_tool(&self, params: Option<Value>) -> Result<Value, RpcErrorObject> {
        let params: ToolCallParams = serde_json::from_value(params.unwrap_or(Value::Null))
            .map_err(|e| RpcErrorObject::new(INVALID_PARAMS, format!("Invalid params: {e}")))?;

        let tool = self.registry.get(&params.name).await.ok_or_else(|| {
            RpcErrorObject::new(INVALID_PARAMS, format!("Unknown tool: {}", params.name))
        })?;

        let arguments = params.arguments.unwrap_or_else(|| json!({}));
        let result = match tool.execute(arguments).await {
            Ok(result) => result,
            // Undecodable arguments land here; report them in-band so the
            // caller sees one failure shape for every tool problem.
            Err(e) => {
                warn!(tool = %params.name, error = %e, "tool rejected parameters");
                ToolResult::error(e.to_string())
            }
        };

        if result.is_error {
            warn!(tool = %params.name, "tool returned error result");
        } else {
            debug!(tool = %params.name, "tool succeeded");
        }
        serde_json::to_value(ToolCallResult::from(result)).map_err(internal)
    }

    fn get_prompt(&self, params: Option<Value>) -> Result<Value, RpcErrorObject> {
        let params: PromptGetParams = serde_json::from_value(params.unwrap_or(Value::Null))
            .map_err(|e| RpcErrorObject::new(INVALID_PARAMS, format!("Invalid params: {e}")))?;

        let result = prompt::get_prompt(&params.name, params.arguments.as_ref()).ok_or_else(|| {
            RpcErrorObject::new(INVALID_PARAMS, format!("Unknown prompt: {}", params.name))
        })?;
        serde_json::to_value(result).map_err(internal)
    }
}

fn internal(e: serde_json::Error) -> RpcErrorObject {
    RpcErrorObject::new(INTERNAL_ERROR, e.to_string())
}
