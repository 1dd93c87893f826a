// ABOUTME: Defines the Tool trait - a named, typed callable exposed to the
// ABOUTME: agent runtime. Tools have a name, description, schema, and async execute.

use async_trait::async_trait;

use super::ToolResult;

/// A tool that can be invoked by the connected agent runtime.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the unique name of this tool.
    fn name(&self) -> &str;

    /// Returns a human-readable description for the caller.
    fn description(&self) -> &str;

    /// Returns the JSON Schema for the tool's input parameters.
    fn schema(&self) -> serde_json::Value;

    /// Execute the tool with the given parameters.
    ///
    /// Domain failures (missing column, unreachable database) are reported
    /// in-band via [`ToolResult::error`]; an `Err` here means the parameters
    /// could not be understood at all.
    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error>;
}
