// ABOUTME: ColumnSummary - descriptive statistics for one numeric column.
// ABOUTME: Matches the count/mean/std/min/quartiles/max shape of a describe() call.

use polars::prelude::*;
use serde::Serialize;

use crate::error::DataError;

/// Descriptive statistics for a numeric column.
///
/// `std` is the sample standard deviation (ddof = 1) and the quartiles are
/// linearly interpolated. All statistics except `count` are null for an
/// empty column.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    pub count: f64,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    #[serde(rename = "25%")]
    pub q25: Option<f64>,
    #[serde(rename = "50%")]
    pub q50: Option<f64>,
    #[serde(rename = "75%")]
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

impl ColumnSummary {
    /// Summarize a series, casting to f64 first. Nulls are excluded from
    /// every statistic; `count` is the number of non-null values.
    pub fn from_series(series: &Series) -> Result<Self, DataError> {
        let name = series.name().to_string();
        if !series.dtype().is_numeric() {
            return Err(DataError::NotNumeric(name));
        }

        let floats = series
            .cast(&DataType::Float64)
            .map_err(|_| DataError::NotNumeric(name.clone()))?;
        let values = floats
            .f64()
            .map_err(|_| DataError::NotNumeric(name.clone()))?;

        Ok(Self {
            count: (values.len() - values.null_count()) as f64,
            mean: values.mean(),
            std: values.std(1),
            min: values.min(),
            q25: values.quantile(0.25, QuantileInterpolOptions::Linear)?,
            q50: values.quantile(0.50, QuantileInterpolOptions::Linear)?,
            q75: values.quantile(0.75, QuantileInterpolOptions::Linear)?,
            max: values.max(),
        })
    }

    /// Summarize a plain vector of values, as returned by a database query.
    pub fn from_values(name: &str, values: Vec<f64>) -> Result<Self, DataError> {
        let series = Series::new(name, values);
        Self::from_series(&series)
    }
}
