// ABOUTME: Defines all error types for the datadesk library using thiserror.
// ABOUTME: Each submodule has its own error enum, unified under ServerError.

/// Top-level error type for the datadesk library.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Plot error: {0}")]
    Plot(#[from] PlotError),

    #[error("Database error: {0}")]
    Db(#[from] DbError),

    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),
}

/// Errors from loading tabular data and computing statistics.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("Dataframe error: {0}")]
    Frame(#[from] polars::prelude::PolarsError),

    #[error("Column '{column}' not found (available: {available})")]
    ColumnNotFound { column: String, available: String },

    #[error("Column '{0}' is not numeric")]
    NotNumeric(String),
}

/// Errors from histogram rendering.
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    #[error("Column '{0}' has no numeric values to plot")]
    Empty(String),

    #[error("Failed to render histogram: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from database operations.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Invalid database configuration: {0}")]
    Config(String),

    #[error("Invalid SQL identifier '{0}'")]
    InvalidIdentifier(String),

    #[error("Unknown table or column `{table}`.`{column}`")]
    UnknownColumn { table: String, column: String },

    #[error("Query failed: {0}")]
    Query(#[from] sqlx::Error),
}

/// Errors from the JSON-RPC serve loop.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
