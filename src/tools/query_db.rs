// ABOUTME: QueryDbTool - summary statistics for a numeric column of a table
// ABOUTME: in the remote analysis database.

use async_trait::async_trait;
use serde::Deserialize;

use crate::data::ColumnSummary;
use crate::db::Db;
use crate::tool::{Tool, ToolResult};

/// Tool for summarizing a numeric database column.
pub struct QueryDbTool {
    db: Db,
}

impl QueryDbTool {
    /// Create the tool over a database handle.
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Tool for QueryDbTool {
    fn name(&self) -> &str {
        "query_db"
    }

    fn description(&self) -> &str {
        "Get summary statistics (count, mean, std, min, max, etc.) for a numeric column of a table in the analysis database."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "table": {
                    "type": "string",
                    "description": "The table to query"
                },
                "column": {
                    "type": "string",
                    "description": "The numeric column to compute statistics for"
                }
            },
            "required": ["table", "column"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            table: String,
            column: String,
        }
        let params: Params = serde_json::from_value(params)?;

        let values = match self.db.column_values(&params.table, &params.column).await {
            Ok(values) => values,
            Err(e) => return Ok(ToolResult::error(e.to_string())),
        };

        match ColumnSummary::from_values(&params.column, values) {
            Ok(summary) => Ok(ToolResult::json(&summary)?),
            Err(e) => Ok(ToolResult::error(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DbConfig;

    fn unreachable_db() -> Db {
        Db::new(DbConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            user: "tester".to_string(),
            password: "".to_string(),
            database: "nope".to_string(),
            notice_table: "smu_notices".to_string(),
        })
    }

    #[tokio::test]
    async fn test_connection_failure_is_error_payload() {
        let tool = QueryDbTool::new(unreachable_db());
        let result = tool
            .execute(serde_json::json!({"table": "grades", "column": "score"}))
            .await
            .unwrap();

        assert!(result.is_error);
        assert!(!result.content.is_empty());
    }

    #[tokio::test]
    async fn test_hostile_identifier_is_error_payload() {
        let tool = QueryDbTool::new(unreachable_db());
        let result = tool
            .execute(serde_json::json!({
                "table": "grades",
                "column": "score` FROM mysql.user -- "
            }))
            .await
            .unwrap();

        assert!(result.is_error);
        assert!(result.content.contains("Invalid SQL identifier"));
    }

    #[tokio::test]
    async fn test_missing_params_rejected() {
        let tool = QueryDbTool::new(unreachable_db());
        let result = tool.execute(serde_json::json!({"table": "grades"})).await;
        assert!(result.is_err());
    }
}
