// ABOUTME: PlotHistogramTool - renders a density histogram of a CSV column.
// ABOUTME: Writes {column}_histogram.png and returns the path.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;

use crate::data;
use crate::error::ServerError;
use crate::plot::{self, DEFAULT_BINS};
use crate::tool::{Tool, ToolResult};

/// Tool for plotting a histogram of a CSV column.
///
/// The PNG lands in the output directory, which defaults to the working
/// directory. Validation failures happen before anything is written.
pub struct PlotHistogramTool {
    out_dir: PathBuf,
}

impl PlotHistogramTool {
    /// Create a tool writing into the working directory.
    pub fn new() -> Self {
        Self::with_output_dir(".")
    }

    /// Create a tool writing into the given directory.
    pub fn with_output_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: dir.into(),
        }
    }
}

impl Default for PlotHistogramTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for PlotHistogramTool {
    fn name(&self) -> &str {
        "plot_histogram"
    }

    fn description(&self) -> &str {
        "Plot a density histogram with a KDE curve for a numeric column in a CSV file. Returns the path of the written PNG."
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
                    "description": "The name of the column to plot"
                },
                "bins": {
                    "type": "integer",
                    "description": "Number of histogram bins (default: 10)"
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
            bins: Option<usize>,
        }
        let params: Params = serde_json::from_value(params)?;
        let bins = params.bins.unwrap_or(DEFAULT_BINS);

        match self.render(&params.csv_path, &params.column, bins) {
            Ok(path) => {
                Ok(ToolResult::text(path.display().to_string()).with_metadata("bins", bins))
            }
            Err(e) => Ok(ToolResult::error(e.to_string())),
        }
    }
}

impl PlotHistogramTool {
    fn render(&self, csv_path: &str, column: &str, bins: usize) -> Result<PathBuf, ServerError> {
        let df = data::load_csv(csv_path)?;
        let series = data::numeric_column(&df, column)?;
        let values = data::numeric_values(series)?;

        Ok(plot::render_histogram(&values, column, bins, &self.out_dir)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, tempdir};

    fn sample_csv() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "label,score").unwrap();
        for score in [3, 5, 5, 6, 7, 7, 7, 8, 9, 10] {
            writeln!(file, "row,{score}").unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[tokio::test]
    async fn test_plot_writes_named_file() {
        let file = sample_csv();
        let dir = tempdir().unwrap();

        let tool = PlotHistogramTool::with_output_dir(dir.path());
        let result = tool
            .execute(serde_json::json!({
                "csv_path": file.path().to_str().unwrap(),
                "column": "score"
            }))
            .await
            .unwrap();

        assert!(!result.is_error);
        let expected = dir.path().join("score_histogram.png");
        assert_eq!(result.content, expected.display().to_string());
        assert!(expected.exists());
    }

    #[tokio::test]
    async fn test_plot_overwrites_previous_file() {
        let file = sample_csv();
        let dir = tempdir().unwrap();
        let existing = dir.path().join("score_histogram.png");
        std::fs::write(&existing, b"stale").unwrap();

        let tool = PlotHistogramTool::with_output_dir(dir.path());
        let result = tool
            .execute(serde_json::json!({
                "csv_path": file.path().to_str().unwrap(),
                "column": "score",
                "bins": 4
            }))
            .await
            .unwrap();

        assert!(!result.is_error);
        assert!(std::fs::metadata(&existing).unwrap().len() > 5);
    }

    #[tokio::test]
    async fn test_missing_column_writes_nothing() {
        let file = sample_csv();
        let dir = tempdir().unwrap();

        let tool = PlotHistogramTool::with_output_dir(dir.path());
        let result = tool
            .execute(serde_json::json!({
                "csv_path": file.path().to_str().unwrap(),
                "column": "grade"
            }))
            .await
            .unwrap();

        assert!(result.is_error);
        assert!(result.content.contains("'grade' not found"));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
