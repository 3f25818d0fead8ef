//! Insight export functionality
//!
//! Writes the flattened insight report as a single-row CSV whose header
//! is the insight keys, plus an optional JSON report with run metadata.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use polars::prelude::*;
use serde::Serialize;

use crate::pipeline::InsightReport;

/// Metadata about the analysis run
#[derive(Serialize)]
pub struct RunMetadata {
    /// Timestamp of the analysis (ISO 8601 format)
    pub timestamp: String,
    /// Flightscope version
    pub flightscope_version: String,
    /// Input file path
    pub input_file: String,
    /// Target column name
    pub target_column: String,
    /// Rows in the dataset
    pub rows: usize,
    /// Columns in the dataset
    pub columns: usize,
}

/// Counts per insight kind
#[derive(Serialize)]
pub struct InsightSummary {
    pub category_rates: usize,
    pub class_means: usize,
    pub target_correlations: usize,
    pub total_insights: usize,
}

/// Complete JSON export with metadata
#[derive(Serialize)]
pub struct EdaReportExport<'a> {
    /// Metadata about the analysis run
    pub metadata: RunMetadata,
    /// Counts per insight kind
    pub summary: InsightSummary,
    /// The typed insight records
    pub insights: &'a InsightReport,
}

/// Parameters for the JSON report export
pub struct ReportParams<'a> {
    pub input_file: &'a str,
    pub target_column: &'a str,
    pub rows: usize,
    pub columns: usize,
}

/// Write the insight report as a wide CSV: one column per insight key,
/// exactly one data row of values.
pub fn write_insights_csv(report: &InsightReport, output_path: &Path) -> Result<()> {
    let entries = report.flatten();
    if entries.is_empty() {
        anyhow::bail!("No insights to export");
    }

    let columns: Vec<Column> = entries
        .into_iter()
        .map(|(key, value)| Column::new(key.into(), vec![value]))
        .collect();
    let mut df = DataFrame::new(columns).context("Failed to assemble insight row")?;

    let mut file = std::fs::File::create(output_path)
        .with_context(|| format!("Failed to create output file: {}", output_path.display()))?;
    CsvWriter::new(&mut file)
        .finish(&mut df)
        .with_context(|| format!("Failed to write CSV file: {}", output_path.display()))?;

    Ok(())
}

/// Export the insight report to a JSON file with run metadata
///
/// # Arguments
/// * `report` - The insight records from the aggregation step
/// * `output_path` - Path to write the JSON file
/// * `params` - Run parameters for metadata
///
/// # Returns
/// Result indicating success or failure
pub fn export_json_report(
    report: &InsightReport,
    output_path: &Path,
    params: &ReportParams,
) -> Result<()> {
    let export = EdaReportExport {
        metadata: RunMetadata {
            timestamp: Utc::now().to_rfc3339(),
            flightscope_version: env!("CARGO_PKG_VERSION").to_string(),
            input_file: params.input_file.to_string(),
            target_column: params.target_column.to_string(),
            rows: params.rows,
            columns: params.columns,
        },
        summary: InsightSummary {
            category_rates: report.category_rates.len(),
            class_means: report.class_means.len(),
            target_correlations: report.target_correlations.len(),
            total_insights: report.len(),
        },
        insights: report,
    };

    let json =
        serde_json::to_string_pretty(&export).context("Failed to serialize insights to JSON")?;

    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write JSON report to {}", output_path.display()))?;

    Ok(())
}
