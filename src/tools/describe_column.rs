// ABOUTME: DescribeColumnTool - summary statistics for one CSV column.
// ABOUTME: Returns the describe()-shaped mapping or a validation error.

use async_trait::async_trait;
use serde::Deserialize;

use crate::data::{self, ColumnSummary};
use crate::error::DataError;
use crate::tool::{Tool, ToolResult};

/// Tool for computing summary statistics of a CSV column.
pub struct DescribeColumnTool;

#[async_trait]
impl Tool for DescribeColumnTool {
    fn name(&self) -> &str {
        "describe_column"
    }

    fn description(&self) -> &str {
        "Get summary statistics (count, mean, std, min, max, etc.) for a specific column in a CSV file."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "csv_path": {
                    "type": "string",
                    "description": "The file path to the CSV file"
                },
                "column": {
                    "type": "string",
                    "description": "The name of the column to compute statistics for"
                }
            },
            "required": ["csv_path", "column"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            csv_path: String,
            column: String,
        }
        let params: Params = serde_json::from_value(params)?;

        match describe(&params.csv_path, &params.column) {
            Ok(summary) => Ok(ToolResult::json(&summary)?),
            Err(e) => Ok(ToolResult::error(e.to_string())),
        }
    }
}

fn describe(csv_path: &str, column: &str) -> Result<ColumnSummary, DataError> {
    let df = data::load_csv(csv_path)?;
    let series = data::numeric_column(&df, column)?;
    ColumnSummary::from_series(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_csv() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "city,population").unwrap();
        writeln!(file, "aalen,100").unwrap();
        writeln!(file, "bonn,200").unwrap();
        writeln!(file, "celle,300").unwrap();
        file.flush().unwrap();
        file
    }

    #[tokio::test]
    async fn test_describe_known_column() {
        let file = sample_csv();

        let tool = DescribeColumnTool;
        let result = tool
            .execute(serde_json::json!({
                "csv_path": file.path().to_str().unwrap(),
                "column": "population"
            }))
            .await
            .unwrap();

        assert!(!result.is_error);
        let stats: serde_json::Value = serde_json::from_str(&result.content).unwrap();
        assert_eq!(stats["count"], 3.0);
        assert_eq!(stats["mean"], 200.0);
        assert_eq!(stats["min"], 100.0);
        assert_eq!(stats["max"], 300.0);
    }

    #[tokio::test]
    async fn test_missing_column_is_error_payload() {
        let file = sample_csv();

        let tool = DescribeColumnTool;
        let result = tool
            .execute(serde_json::json!({
                "csv_path": file.path().to_str().unwrap(),
                "column": "area"
            }))
            .await
            .unwrap();

        assert!(result.is_error);
        assert!(result.content.contains("'area' not found"));
    }

    #[tokio::test]
    async fn test_missing_file_is_error_payload() {
        let tool = DescribeColumnTool;
        let result = tool
            .execute(serde_json::json!({
                "csv_path": "/nonexistent/data.csv",
                "column": "population"
            }))
            .await
            .unwrap();

        assert!(result.is_error);
    }

    #[tokio::test]
    async fn test_missing_params_rejected() {
        let tool = DescribeColumnTool;
        let result = tool.execute(serde_json::json!({})).await;
        assert!(result.is_err());
    }
}
