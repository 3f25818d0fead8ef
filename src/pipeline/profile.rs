//! Column profile for the flight-cancellation dataset
//!
//! Declares which columns the pipeline treats as categorical, numeric,
//! ordinal, and target, and resolves that contract against a loaded
//! table. Referenced columns absent from the table are skipped wherever
//! they are used, never an error; only the target column is mandatory.

use anyhow::{Context, Result};
use polars::prelude::*;

/// Tolerance for floating point comparison when checking binary 0/1 values
const TOLERANCE: f64 = 1e-9;

/// Column roles the pipeline expects in the dataset
#[derive(Debug, Clone)]
pub struct ColumnProfile {
    /// Binary outcome column (0/1 or boolean)
    pub target: String,
    /// Categorical columns aggregated into cancellation rates
    pub categorical: Vec<String>,
    /// Numeric columns for summaries, correlations, and class means
    pub numeric: Vec<String>,
    /// Low-cardinality calendar columns, count-plot distributions only
    pub ordinal: Vec<String>,
}

impl Default for ColumnProfile {
    fn default() -> Self {
        Self {
            target: "Flight_Cancelled".to_string(),
            categorical: vec![
                "Airline".to_string(),
                "Origin_Airport".to_string(),
                "Destination_Airport".to_string(),
                "Airplane_Type".to_string(),
            ],
            numeric: vec![
                "Flight_Distance".to_string(),
                "Scheduled_Departure_Time".to_string(),
                "Weather_Score".to_string(),
                "Previous_Flight_Delay_Minutes".to_string(),
                "Airline_Rating".to_string(),
                "Passenger_Load".to_string(),
            ],
            ordinal: vec!["Day_of_Week".to_string(), "Month".to_string()],
        }
    }
}

impl ColumnProfile {
    /// Default flight profile with a different target column name
    pub fn with_target(target: &str) -> Self {
        Self {
            target: target.to_string(),
            ..Default::default()
        }
    }

    /// Categorical columns actually present in the table
    pub fn present_categorical(&self, df: &DataFrame) -> Vec<String> {
        present(df, &self.categorical)
    }

    /// Numeric columns actually present in the table
    pub fn present_numeric(&self, df: &DataFrame) -> Vec<String> {
        present(df, &self.numeric)
    }

    /// Ordinal columns actually present in the table
    pub fn present_ordinal(&self, df: &DataFrame) -> Vec<String> {
        present(df, &self.ordinal)
    }

    /// Referenced feature columns the table lacks. The target is not
    /// listed here; its absence is fatal and reported separately.
    pub fn missing_columns(&self, df: &DataFrame) -> Vec<String> {
        self.categorical
            .iter()
            .chain(self.numeric.iter())
            .chain(self.ordinal.iter())
            .filter(|name| !has_column(df, name))
            .cloned()
            .collect()
    }
}

fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_names().iter().any(|c| c.as_str() == name)
}

fn present(df: &DataFrame, names: &[String]) -> Vec<String> {
    names
        .iter()
        .filter(|name| has_column(df, name))
        .cloned()
        .collect()
}

/// Verify the target column exists and contains only binary 0/1 values
/// (boolean columns count, they cast to 0/1)
pub fn ensure_binary_target(df: &DataFrame, target: &str) -> Result<()> {
    let target_col = df.column(target).with_context(|| {
        format!(
            "Target column '{}' not found in dataset. Available columns: {:?}",
            target,
            df.get_column_names()
        )
    })?;

    if target_col.len() == 0 {
        anyhow::bail!("Target column '{}' is empty", target);
    }

    if target_col.null_count() == target_col.len() {
        anyhow::bail!("Target column '{}' contains only null values", target);
    }

    let float_col = cast_target(target_col)?;
    let unique = float_col.unique()?;
    let unique_values: Vec<f64> = unique.f64()?.into_iter().flatten().collect();

    let is_binary = unique_values
        .iter()
        .all(|&v| (v - 0.0).abs() < TOLERANCE || (v - 1.0).abs() < TOLERANCE);

    if !is_binary {
        anyhow::bail!(
            "Target column '{}' must be binary 0/1, found values {:?}",
            target,
            unique_values
        );
    }

    Ok(())
}

/// Extract the target as 0.0/1.0 values aligned with the table rows,
/// `None` where the target is null
pub fn target_values(df: &DataFrame, target: &str) -> Result<Vec<Option<f64>>> {
    let target_col = df
        .column(target)
        .with_context(|| format!("Target column '{}' not found", target))?;

    let float_col = cast_target(target_col)?;
    Ok(float_col.f64()?.into_iter().collect())
}

fn cast_target(col: &Column) -> Result<Column> {
    // A non-strict cast turns a String column into all nulls instead of
    // failing, so the dtype has to be checked before casting
    let dtype = col.dtype();
    if !dtype.is_primitive_numeric() && dtype != &DataType::Boolean {
        anyhow::bail!(
            "Target column '{}' is not boolean or numeric (dtype: {})",
            col.name(),
            dtype
        );
    }

    col.cast(&DataType::Float64)
        .with_context(|| format!("Failed to cast target column '{}' to Float64", col.name()))
}

/// Convert a column of any supported dtype to per-row string labels
/// for grouping, `None` where the value is null
pub fn column_as_labels(col: &Column) -> Result<Vec<Option<String>>> {
    let values: Vec<Option<String>> = match col.dtype() {
        DataType::String => col
            .str()?
            .into_iter()
            .map(|v| v.map(|s| s.to_string()))
            .collect(),
        DataType::Int8 | DataType::Int16 | DataType::Int32 | DataType::Int64 => {
            let cast = col.cast(&DataType::Int64)?;
            cast.i64()?
                .into_iter()
                .map(|v| v.map(|n| n.to_string()))
                .collect()
        }
        DataType::UInt8 | DataType::UInt16 | DataType::UInt32 | DataType::UInt64 => {
            let cast = col.cast(&DataType::UInt64)?;
            cast.u64()?
                .into_iter()
                .map(|v| v.map(|n| n.to_string()))
                .collect()
        }
        DataType::Float32 | DataType::Float64 => {
            let cast = col.cast(&DataType::Float64)?;
            cast.f64()?
                .into_iter()
                .map(|v| v.map(|n| format!("{}", n)))
                .collect()
        }
        DataType::Boolean => col
            .bool()?
            .into_iter()
            .map(|v| v.map(|b| b.to_string()))
            .collect(),
        _ => {
            // For other types, try to cast to string
            let cast = col.cast(&DataType::String)?;
            cast.str()?
                .into_iter()
                .map(|v| v.map(|s| s.to_string()))
                .collect()
        }
    };

    Ok(values)
}
