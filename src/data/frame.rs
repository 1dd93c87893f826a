// ABOUTME: CSV loading and column lookup on top of polars.
// ABOUTME: Validation failures name the missing column and what is available.

use std::path::Path;

use polars::prelude::*;

use crate::error::DataError;

/// Load a CSV file into a dataframe, inferring column types from the data.
pub fn load_csv(path: impl AsRef<Path>) -> Result<DataFrame, DataError> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(1000))
        .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))?
        .finish()?;
    Ok(df)
}

/// Look up a column and require it to hold numeric data.
pub fn numeric_column<'a>(df: &'a DataFrame, column: &str) -> Result<&'a Series, DataError> {
    let series = df.column(column).map_err(|_| DataError::ColumnNotFound {
        column: column.to_string(),
        available: df.get_column_names().join(", "),
    })?;

    if !series.dtype().is_numeric() {
        return Err(DataError::NotNumeric(column.to_string()));
    }

    Ok(series)
}

/// Non-null values of a numeric series, widened to f64.
pub fn numeric_values(series: &Series) -> Result<Vec<f64>, DataError> {
    let name = series.name().to_string();
    if !series.dtype().is_numeric() {
        return Err(DataError::NotNumeric(name));
    }

    let floats = series
        .cast(&DataType::Float64)
        .map_err(|_| DataError::NotNumeric(name.clone()))?;
    let values = floats.f64().map_err(|_| DataError::NotNumeric(name))?;

    Ok(values.into_iter().flatten().collect())
}
