//! Cancellation insights - grouped aggregation against the target
//!
//! Builds the typed records behind the one-row summary export: the
//! cancellation rate per category of each categorical column, the mean
//! of each numeric column per target class, and each numeric column's
//! Pearson correlation with the target. Records carry named fields;
//! the flat string keys of the CSV exist only at the export boundary.

use std::collections::HashMap;

use anyhow::Result;
use polars::prelude::*;
use serde::Serialize;

use super::correlation::pearson_correlation;
use super::profile::{column_as_labels, target_values, ColumnProfile};

/// Cancellation rate for one (categorical column, category) group
#[derive(Debug, Clone, Serialize)]
pub struct CategoryRate {
    pub column: String,
    pub category: String,
    /// Mean of the binary target within the group, in [0, 1]
    pub rate: f64,
    /// Rows in the group with a non-null target
    pub rows: usize,
}

/// Mean of one numeric column within one target class
#[derive(Debug, Clone, Serialize)]
pub struct ClassMean {
    pub column: String,
    pub cancelled: bool,
    pub mean: f64,
}

/// Pearson correlation of one numeric column against the target
#[derive(Debug, Clone, Serialize)]
pub struct TargetCorrelation {
    pub column: String,
    pub coefficient: f64,
}

impl CategoryRate {
    /// Flat key used in the summary CSV header
    pub fn key(&self) -> String {
        format!("{}_{}_Cancellation_Rate", self.column, self.category)
    }
}

impl ClassMean {
    /// Flat key used in the summary CSV header
    pub fn key(&self) -> String {
        format!("{}Mean_Cancelled{}", self.column, self.cancelled as u8)
    }
}

impl TargetCorrelation {
    /// Flat key used in the summary CSV header
    pub fn key(&self) -> String {
        format!("{}_Correlation_With_Cancelled", self.column)
    }
}

/// All insights derived from one dataset, immutable once built
#[derive(Debug, Clone, Default, Serialize)]
pub struct InsightReport {
    pub category_rates: Vec<CategoryRate>,
    pub class_means: Vec<ClassMean>,
    pub target_correlations: Vec<TargetCorrelation>,
}

impl InsightReport {
    pub fn len(&self) -> usize {
        self.category_rates.len() + self.class_means.len() + self.target_correlations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten into (key, value) pairs in export order: category rates,
    /// then class means, then correlations
    pub fn flatten(&self) -> Vec<(String, f64)> {
        let mut entries = Vec::with_capacity(self.len());
        for rate in &self.category_rates {
            entries.push((rate.key(), rate.rate));
        }
        for mean in &self.class_means {
            entries.push((mean.key(), mean.mean));
        }
        for corr in &self.target_correlations {
            entries.push((corr.key(), corr.coefficient));
        }
        entries
    }
}

/// Build the full insight report in one pass over the table.
///
/// Columns follow profile declaration order; categories are sorted
/// within a column. Absent columns produce no records. A statistic that
/// cannot be computed (empty group, zero variance) produces no record
/// either, so no NaN ever reaches the export.
pub fn build_insight_report(df: &DataFrame, profile: &ColumnProfile) -> Result<InsightReport> {
    let target = target_values(df, &profile.target)?;

    let mut category_rates = Vec::new();
    for name in profile.present_categorical(df) {
        category_rates.extend(category_rates_for(df, &name, &target)?);
    }

    let mut class_means = Vec::new();
    let mut target_correlations = Vec::new();
    for name in profile.present_numeric(df) {
        class_means.extend(class_means_for(df, &name, &target)?);

        let correlated = df
            .column(&name)
            .ok()
            .zip(df.column(&profile.target).ok())
            .and_then(|(col, target_col)| pearson_correlation(col, target_col));
        if let Some(coefficient) = correlated {
            target_correlations.push(TargetCorrelation {
                column: name.clone(),
                coefficient,
            });
        }
    }

    Ok(InsightReport {
        category_rates,
        class_means,
        target_correlations,
    })
}

/// Group one categorical column by value and average the target.
/// Rows with a null label or null target stay out of their group.
fn category_rates_for(
    df: &DataFrame,
    name: &str,
    target: &[Option<f64>],
) -> Result<Vec<CategoryRate>> {
    let col = match df.column(name) {
        Ok(col) => col,
        Err(_) => return Ok(Vec::new()),
    };

    let labels = column_as_labels(col)?;

    let mut groups: HashMap<String, (f64, usize)> = HashMap::new();
    for (label, t) in labels.into_iter().zip(target.iter()) {
        if let (Some(label), Some(t)) = (label, t) {
            let entry = groups.entry(label).or_insert((0.0, 0));
            entry.0 += t;
            entry.1 += 1;
        }
    }

    let mut rates: Vec<CategoryRate> = groups
        .into_iter()
        .map(|(category, (sum, rows))| CategoryRate {
            column: name.to_string(),
            category,
            rate: sum / rows as f64,
            rows,
        })
        .collect();

    // Sort for consistent ordering
    rates.sort_by(|a, b| a.category.cmp(&b.category));
    Ok(rates)
}

/// Mean of one numeric column per target class. A class with no usable
/// rows yields no record.
fn class_means_for(df: &DataFrame, name: &str, target: &[Option<f64>]) -> Result<Vec<ClassMean>> {
    let float_col = match df
        .column(name)
        .ok()
        .and_then(|col| col.cast(&DataType::Float64).ok())
    {
        Some(col) => col,
        None => return Ok(Vec::new()),
    };
    let ca = float_col.f64()?;

    // (sum, rows) per class, index 1 = cancelled. NaN parses as a
    // value rather than a null, so filter on is_finite explicitly
    let mut acc = [(0.0f64, 0usize); 2];
    for (value, t) in ca.iter().zip(target.iter()) {
        if let (Some(value), Some(t)) = (value, t) {
            if value.is_finite() {
                let class = (*t > 0.5) as usize;
                acc[class].0 += value;
                acc[class].1 += 1;
            }
        }
    }

    let mut means = Vec::new();
    for (class, (sum, rows)) in acc.iter().enumerate() {
        if *rows > 0 {
            means.push(ClassMean {
                column: name.to_string(),
                cancelled: class == 1,
                mean: sum / *rows as f64,
            });
        }
    }
    Ok(means)
}

/// Finite values of a numeric column split by target class, as
/// (completed, cancelled). `None` when the column is absent or nothing
/// usable remains.
pub fn class_split_values(
    df: &DataFrame,
    name: &str,
    target: &[Option<f64>],
) -> Result<Option<(Vec<f64>, Vec<f64>)>> {
    let float_col = match df
        .column(name)
        .ok()
        .and_then(|col| col.cast(&DataType::Float64).ok())
    {
        Some(col) => col,
        None => return Ok(None),
    };
    let ca = float_col.f64()?;

    let mut completed = Vec::new();
    let mut cancelled = Vec::new();
    for (value, t) in ca.iter().zip(target.iter()) {
        if let (Some(value), Some(t)) = (value, t) {
            if !value.is_finite() {
                continue;
            }
            if *t > 0.5 {
                cancelled.push(value);
            } else {
                completed.push(value);
            }
        }
    }

    if completed.is_empty() && cancelled.is_empty() {
        return Ok(None);
    }
    Ok(Some((completed, cancelled)))
}
