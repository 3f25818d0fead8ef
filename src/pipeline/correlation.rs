//! Pearson correlation over numeric columns
//!
//! Two paths, both unweighted: a single-pass pairwise kernel used for
//! correlation-with-target, and a matrix path (standardize, then Z^T * Z)
//! that backs the relationship heatmap.

use anyhow::Result;
use faer::Mat;
use polars::prelude::*;
use rayon::prelude::*;

/// A strongly correlated pair of numeric columns
#[derive(Debug, Clone)]
pub struct CorrelatedPair {
    pub column_a: String,
    pub column_b: String,
    pub correlation: f64,
}

/// Pearson correlation matrix over the usable numeric columns.
/// Symmetric, diagonal exactly 1.0, every cell in [-1, 1].
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    values: Mat<f64>,
}

impl CorrelationMatrix {
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[(i, j)]
    }

    /// Upper-triangle pairs with |r| at or above the threshold,
    /// strongest first
    pub fn strong_pairs(&self, threshold: f64) -> Vec<CorrelatedPair> {
        let n = self.columns.len();
        let mut pairs = Vec::new();

        for i in 0..n {
            for j in (i + 1)..n {
                let r = self.values[(i, j)];
                if r.abs() >= threshold && !r.is_nan() {
                    pairs.push(CorrelatedPair {
                        column_a: self.columns[i].clone(),
                        column_b: self.columns[j].clone(),
                        correlation: r,
                    });
                }
            }
        }

        pairs.sort_by(|a, b| {
            b.correlation
                .abs()
                .partial_cmp(&a.correlation.abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        pairs
    }
}

/// Compute Pearson correlation between two columns using a single-pass
/// Welford algorithm for numerical stability.
///
/// Rows where either side is null or non-finite are skipped. Returns
/// `None` when the columns are not castable to floats, fewer than two
/// paired values remain, or either side has zero variance.
pub fn pearson_correlation(a: &Column, b: &Column) -> Option<f64> {
    let col_a = a.cast(&DataType::Float64).ok()?;
    let col_b = b.cast(&DataType::Float64).ok()?;
    let ca_a = col_a.f64().ok()?;
    let ca_b = col_b.f64().ok()?;

    if ca_a.len() != ca_b.len() {
        return None;
    }

    let mut count = 0.0;
    let mut mean_x = 0.0;
    let mut mean_y = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    let mut cov_xy = 0.0;

    for (x, y) in ca_a.iter().zip(ca_b.iter()) {
        if let (Some(x), Some(y)) = (x, y) {
            // A single NaN would otherwise poison every accumulator
            if !x.is_finite() || !y.is_finite() {
                continue;
            }
            count += 1.0;
            let dx = x - mean_x;
            let dy = y - mean_y;
            mean_x += dx / count;
            mean_y += dy / count;
            var_x += dx * (x - mean_x);
            var_y += dy * (y - mean_y);
            cov_xy += dx * (y - mean_y);
        }
    }

    if count < 2.0 {
        return None;
    }

    let std_x = (var_x / count).sqrt();
    let std_y = (var_y / count).sqrt();

    if std_x == 0.0 || std_y == 0.0 {
        return None;
    }

    // Clamp floating point spill so perfect correlations report exactly 1
    Some((cov_xy / (count * std_x * std_y)).clamp(-1.0, 1.0))
}

/// Compute the correlation matrix over the requested columns.
///
/// Algorithm:
/// 1. Cast each present column to Float64 (absent columns are skipped)
/// 2. Standardize: z = (x - mean) / (std * sqrt(n)), nulls and
///    non-finite values contribute 0
/// 3. R = Z^T * Z
///
/// Constant and all-null columns are excluded. Returns `None` when fewer
/// than two usable columns remain.
pub fn correlation_matrix(
    df: &DataFrame,
    columns: &[String],
) -> Result<Option<CorrelationMatrix>> {
    let float_columns: Vec<(String, Column)> = columns
        .iter()
        .filter_map(|name| {
            df.column(name)
                .ok()
                .and_then(|col| col.cast(&DataType::Float64).ok())
                .map(|col| (name.clone(), col))
        })
        .collect();

    if float_columns.len() < 2 {
        return Ok(None);
    }

    let n_rows = float_columns[0].1.len();
    if n_rows == 0 {
        return Ok(None);
    }

    // Standardize each column in parallel
    let standardized: Vec<Option<Vec<f64>>> = float_columns
        .par_iter()
        .map(|(_, col)| {
            let ca = col.f64().ok()?;

            let mut sum = 0.0;
            let mut count = 0.0;
            for x in ca.iter().flatten().filter(|x| x.is_finite()) {
                sum += x;
                count += 1.0;
            }
            if count < 2.0 {
                return None;
            }
            let mean = sum / count;

            let mut sq_dev = 0.0;
            for x in ca.iter().flatten().filter(|x| x.is_finite()) {
                let dev = x - mean;
                sq_dev += dev * dev;
            }
            let std = (sq_dev / count).sqrt();
            if std == 0.0 {
                return None; // Constant column - skip
            }

            let scale = std * count.sqrt();
            Some(
                ca.iter()
                    .map(|v| match v {
                        Some(x) if x.is_finite() => (x - mean) / scale,
                        _ => 0.0,
                    })
                    .collect(),
            )
        })
        .collect();

    // Filter out columns that failed (constant or all null)
    let valid: Vec<(usize, Vec<f64>)> = standardized
        .into_iter()
        .enumerate()
        .filter_map(|(i, opt)| opt.map(|v| (i, v)))
        .collect();

    if valid.len() < 2 {
        return Ok(None);
    }

    let names: Vec<String> = valid
        .iter()
        .map(|(i, _)| float_columns[*i].0.clone())
        .collect();
    let n_cols = valid.len();

    let mut z = Mat::<f64>::zeros(n_rows, n_cols);
    for (col_idx, (_, col_data)) in valid.iter().enumerate() {
        for (row_idx, &val) in col_data.iter().enumerate() {
            z[(row_idx, col_idx)] = val;
        }
    }

    let product = z.transpose() * &z;

    // Exact unit diagonal, clamp rounding spill off the diagonal
    let mut values = Mat::<f64>::zeros(n_cols, n_cols);
    for i in 0..n_cols {
        for j in 0..n_cols {
            values[(i, j)] = if i == j {
                1.0
            } else {
                product[(i, j)].clamp(-1.0, 1.0)
            };
        }
    }

    Ok(Some(CorrelationMatrix {
        columns: names,
        values,
    }))
}
