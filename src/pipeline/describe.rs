//! Descriptive statistics for numeric and categorical columns
//!
//! Numeric columns get the count/mean/std/min/quartiles/max summary,
//! categorical columns get frequency counts per distinct value. Results
//! are displayed only; nothing here is persisted.

use std::collections::HashMap;

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Table};
use console::style;
use polars::prelude::*;
use serde::Serialize;

use super::profile::column_as_labels;

/// Summary statistics for one numeric column
#[derive(Debug, Clone, Serialize)]
pub struct NumericSummary {
    pub column: String,
    /// Non-null, finite values
    pub count: usize,
    pub null_count: usize,
    pub mean: f64,
    /// Sample standard deviation (ddof = 1), 0.0 for a single value
    pub std: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Frequency counts for one categorical column
#[derive(Debug, Clone, Serialize)]
pub struct CategoryCounts {
    pub column: String,
    pub null_count: usize,
    /// (label, row count), most frequent first, ties broken by label
    pub counts: Vec<(String, usize)>,
}

impl CategoryCounts {
    /// Total rows covered by the counted labels (nulls excluded)
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }
}

/// Non-null finite values of a numeric column, `None` when the column
/// is absent, not castable to floats, or has nothing to report
pub fn numeric_values(df: &DataFrame, name: &str) -> Result<Option<Vec<f64>>> {
    let float_col = match df
        .column(name)
        .ok()
        .and_then(|col| col.cast(&DataType::Float64).ok())
    {
        Some(col) => col,
        None => return Ok(None),
    };

    let values: Vec<f64> = float_col
        .f64()?
        .into_iter()
        .flatten()
        .filter(|v| v.is_finite())
        .collect();

    if values.is_empty() {
        return Ok(None);
    }
    Ok(Some(values))
}

/// Compute the numeric summary for one column, skipping absent or
/// non-numeric columns
pub fn summarize_numeric(df: &DataFrame, name: &str) -> Result<Option<NumericSummary>> {
    let mut values = match numeric_values(df, name)? {
        Some(values) => values,
        None => return Ok(None),
    };
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let count = values.len();
    let null_count = df.height() - count;
    let mean = values.iter().sum::<f64>() / count as f64;
    let variance = if count > 1 {
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64
    } else {
        0.0
    };

    Ok(Some(NumericSummary {
        column: name.to_string(),
        count,
        null_count,
        mean,
        std: variance.sqrt(),
        min: values[0],
        q1: quantile_sorted(&values, 0.25),
        median: quantile_sorted(&values, 0.50),
        q3: quantile_sorted(&values, 0.75),
        max: values[count - 1],
    }))
}

/// Linear-interpolation quantile over pre-sorted values
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos = q * (n - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    if lower == upper {
        sorted[lower]
    } else {
        let frac = pos - lower as f64;
        sorted[lower] + (sorted[upper] - sorted[lower]) * frac
    }
}

/// Count rows per distinct value of a categorical column, skipping
/// absent or all-null columns
pub fn count_categories(df: &DataFrame, name: &str) -> Result<Option<CategoryCounts>> {
    let col = match df.column(name) {
        Ok(col) => col,
        Err(_) => return Ok(None),
    };

    let labels = column_as_labels(col)?;

    let mut freq: HashMap<String, usize> = HashMap::new();
    let mut null_count = 0usize;
    for label in labels {
        match label {
            Some(label) => *freq.entry(label).or_insert(0) += 1,
            None => null_count += 1,
        }
    }

    if freq.is_empty() {
        return Ok(None);
    }

    let mut counts: Vec<(String, usize)> = freq.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    Ok(Some(CategoryCounts {
        column: name.to_string(),
        null_count,
        counts,
    }))
}

/// Render the numeric summary table
pub fn display_numeric_summaries(summaries: &[NumericSummary]) {
    if summaries.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Column").add_attribute(Attribute::Bold),
        Cell::new("Count").add_attribute(Attribute::Bold),
        Cell::new("Mean").add_attribute(Attribute::Bold),
        Cell::new("Std").add_attribute(Attribute::Bold),
        Cell::new("Min").add_attribute(Attribute::Bold),
        Cell::new("25%").add_attribute(Attribute::Bold),
        Cell::new("50%").add_attribute(Attribute::Bold),
        Cell::new("75%").add_attribute(Attribute::Bold),
        Cell::new("Max").add_attribute(Attribute::Bold),
    ]);

    for summary in summaries {
        table.add_row(vec![
            Cell::new(&summary.column),
            Cell::new(summary.count),
            Cell::new(format!("{:.2}", summary.mean)),
            Cell::new(format!("{:.2}", summary.std)),
            Cell::new(format!("{:.2}", summary.min)),
            Cell::new(format!("{:.2}", summary.q1)),
            Cell::new(format!("{:.2}", summary.median)),
            Cell::new(format!("{:.2}", summary.q3)),
            Cell::new(format!("{:.2}", summary.max)),
        ]);
    }

    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}

/// Render the frequency table for one categorical column
pub fn display_category_counts(counts: &CategoryCounts, top: usize) {
    println!();
    println!(
        "    {} {}",
        style(&counts.column).white().bold(),
        style(format!("({} distinct)", counts.distinct())).dim()
    );

    let total = counts.total();
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Value").add_attribute(Attribute::Bold),
        Cell::new("Count").add_attribute(Attribute::Bold),
        Cell::new("Share").add_attribute(Attribute::Bold),
    ]);

    for (label, count) in counts.counts.iter().take(top) {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(count),
            Cell::new(format!("{:.1}%", *count as f64 / total as f64 * 100.0)),
        ]);
    }

    for line in table.to_string().lines() {
        println!("    {}", line);
    }

    let hidden = counts.counts.len().saturating_sub(top);
    if hidden > 0 {
        println!("      {}", style(format!("(+{} more)", hidden)).dim());
    }
    if counts.null_count > 0 {
        println!(
            "      {}",
            style(format!("({} null)", counts.null_count)).dim()
        );
    }
}
