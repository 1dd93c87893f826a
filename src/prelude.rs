// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use datadesk::prelude::*;` to get started quickly.

pub use crate::config::DbConfig;
pub use crate::data::{ColumnSummary, load_csv, numeric_column, numeric_values};
pub use crate::db::{Db, Notice, validate_identifier};
pub use crate::error::{DataError, DbError, PlotError, RpcError, ServerError};
pub use crate::plot::{DEFAULT_BINS, histogram_filename, render_histogram};
pub use crate::server::{
    ContentBlock, InitializeResult, PromptGetResult, PromptInfo, Router, RpcErrorObject,
    RpcRequest, RpcResponse, ServerCapabilities, ServerInfo, ToolCallParams, ToolCallResult,
    ToolInfo, ToolsListResult, serve,
};
pub use crate::tool::{Registry, Tool, ToolResult};
pub use crate::tools::{
    DescribeColumnTool, PlotHistogramTool, QueryDbTool, SearchNoticesTool, default_registry,
};
