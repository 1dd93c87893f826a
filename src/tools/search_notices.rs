// ABOUTME: SearchNoticesTool - keyword search over the notice table's titles.
// ABOUTME: Returns matching rows as JSON; zero matches is an empty array.

use async_trait::async_trait;
use serde::Deserialize;

use crate::db::Db;
use crate::tool::{Tool, ToolResult};

/// Tool for finding notices whose title contains a keyword.
pub struct SearchNoticesTool {
    db: Db,
}

impl SearchNoticesTool {
    /// Create the tool over a database handle.
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Tool for SearchNoticesTool {
    fn name(&self) -> &str {
        "query_smu_notices_by_keyword"
    }

    fn description(&self) -> &str {
        "Search SMU notices whose title contains the given keyword and return the matching rows."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "keyword": {
                    "type": "string",
                    "description": "Substring to look for in notice titles"
                }
            },
            "required": ["keyword"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            keyword: String,
        }
        let params: Params = serde_json::from_value(params)?;

        match self.db.notices_by_keyword(&params.keyword).await {
            Ok(notices) => {
                let count = notices.len();
                Ok(ToolResult::json(&notices)?.with_metadata("matches", count))
            }
            Err(e) => Ok(ToolResult::error(e.to_string())),
        }
    }
}
