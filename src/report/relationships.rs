//! Relationship views - correlation heatmap plus scatter plots
//!
//! The heatmap covers every profiled numeric column with variance.
//! Scatter plots are drawn only for pairs whose coefficient clears the
//! configured threshold, strongest first.

use anyhow::Result;
use console::style;
use polars::prelude::*;

use super::charts::{render_heatmap, render_scatter};
use crate::pipeline::{correlation_matrix, ColumnProfile};
use crate::utils::{print_count, print_info};

/// Render the heatmap and threshold-passing scatter plots, returning
/// how many charts were drawn.
pub fn render_relationships(
    df: &DataFrame,
    profile: &ColumnProfile,
    scatter_threshold: f64,
) -> Result<usize> {
    let columns = profile.present_numeric(df);
    let matrix = match correlation_matrix(df, &columns)? {
        Some(matrix) => matrix,
        None => {
            print_info("Not enough numeric columns with variance to correlate");
            return Ok(0);
        }
    };

    render_heatmap(&matrix);
    let mut rendered = 1;

    let pairs = matrix.strong_pairs(scatter_threshold);
    if pairs.is_empty() {
        print_info(&format!(
            "No column pairs with |r| >= {:.2}; skipping scatter plots",
            scatter_threshold
        ));
        return Ok(rendered);
    }

    print_count(
        "strongly related pair(s)",
        pairs.len(),
        Some(&format!("(|r| >= {:.2})", scatter_threshold)),
    );
    println!();

    for pair in &pairs {
        if let Some((xs, ys)) = paired_values(df, &pair.column_a, &pair.column_b)? {
            println!(
                "  {} {}",
                style(format!("{} vs {}", pair.column_a, pair.column_b))
                    .white()
                    .bold(),
                style(format!("(r = {:+.2})", pair.correlation)).dim()
            );
            render_scatter(&xs, &ys);
            println!();
            rendered += 1;
        }
    }

    Ok(rendered)
}

/// Row-aligned values of two numeric columns, keeping only rows where
/// both sides are non-null.
fn paired_values(df: &DataFrame, a: &str, b: &str) -> Result<Option<(Vec<f64>, Vec<f64>)>> {
    let cast = |name: &str| {
        df.column(name)
            .ok()
            .and_then(|col| col.cast(&DataType::Float64).ok())
    };
    let (col_a, col_b) = match (cast(a), cast(b)) {
        (Some(col_a), Some(col_b)) => (col_a, col_b),
        _ => return Ok(None),
    };

    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for (x, y) in col_a.f64()?.iter().zip(col_b.f64()?.iter()) {
        if let (Some(x), Some(y)) = (x, y) {
            if x.is_finite() && y.is_finite() {
                xs.push(x);
                ys.push(y);
            }
        }
    }

    if xs.len() < 2 {
        return Ok(None);
    }
    Ok(Some((xs, ys)))
}
