// ABOUTME: The tools this server exposes - CSV statistics, histogram
// ABOUTME: plotting, and queries against the fixed analysis database.

mod describe_column;
mod plot_histogram;
mod query_db;
mod search_notices;

pub use describe_column::DescribeColumnTool;
pub use plot_histogram::PlotHistogramTool;
pub use query_db::QueryDbTool;
pub use search_notices::SearchNoticesTool;

use crate::config::DbConfig;
use crate::db::Db;
use crate::tool::Registry;

/// Build a registry holding every tool this server ships.
pub async fn default_registry(config: &DbConfig) -> Registry {
    let registry = Registry::new();
    let db = Db::new(config.clone());

    registry.register(DescribeColumnTool).await;
    registry.register(PlotHistogramTool::new()).await;
    registry.register(QueryDbTool::new(db.clone())).await;
    registry.register(SearchNoticesTool::new(db)).await;

    registry
}
