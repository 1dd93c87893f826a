// ABOUTME: Data module - CSV loading and descriptive statistics.
// ABOUTME: One summary shape shared by the CSV and database paths.

mod frame;
mod stats;

pub use frame::*;
pub use stats::*;
