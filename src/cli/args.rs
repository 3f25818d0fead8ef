//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Flightscope - Explore a flight-cancellation dataset from the terminal
#[derive(Parser, Debug)]
#[command(name = "flightscope")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file path (CSV or Parquet)
    #[arg(short, long, default_value = "flight_cancellation_cleaned.csv")]
    pub input: PathBuf,

    /// Target column name (binary cancellation flag)
    #[arg(short, long, default_value = "Flight_Cancelled")]
    pub target: String,

    /// Output path for the insight summary CSV.
    /// Defaults to the input directory with an '_insights' suffix (e.g., data.csv -> data_insights.csv).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of equal-width bins for histograms
    #[arg(long, default_value = "10")]
    pub bins: usize,

    /// Maximum categories shown per count plot; the rest collapse into one line
    #[arg(long, default_value = "10")]
    pub top_categories: usize,

    /// Scatter plot threshold (0.0 to 1.0).
    /// Column pairs with absolute correlation at or above this value get a scatter plot.
    #[arg(long, default_value = "0.3", value_parser = validate_scatter_threshold)]
    pub scatter_threshold: f64,

    /// Skip the chart steps; tables and the insight export still run
    #[arg(long, default_value = "false")]
    pub no_charts: bool,

    /// Also write a JSON report with run metadata next to the input file
    #[arg(long, default_value = "false")]
    pub json_report: bool,

    /// Number of rows to use for schema inference (CSV only).
    /// Higher values improve type detection for ambiguous columns but may be slower.
    /// Use 0 for full table scan (very slow for large files).
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,
}

impl Cli {
    /// Get the output path, deriving from input if not explicitly provided.
    /// The derived path will be in the same directory as the input with an '_insights' suffix.
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            let parent = self
                .input
                .parent()
                .unwrap_or_else(|| std::path::Path::new("."));
            let stem = self
                .input
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("output");
            parent.join(format!("{}_insights.csv", stem))
        })
    }

    /// Get the JSON report path, derived from the input file.
    /// The derived path will be in the same directory as the input with an '_eda_report.json' suffix.
    pub fn json_report_path(&self) -> PathBuf {
        let parent = self
            .input
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."));
        let stem = self
            .input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output");
        parent.join(format!("{}_eda_report.json", stem))
    }
}

/// Validator for scatter_threshold parameter
fn validate_scatter_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if !(0.0..=1.0).contains(&value) {
        Err(format!(
            "scatter_threshold must be between 0.0 and 1.0, got {}",
            value
        ))
    } else {
        Ok(value)
    }
}
