//! Distribution views - one chart per profiled column
//!
//! Histograms for numeric columns, count plots for categorical and
//! ordinal ones. Columns the profile expects but the dataset lacks were
//! already dropped by the profile, so everything here draws.

use anyhow::Result;
use console::style;
use polars::prelude::DataFrame;

use super::charts::{render_count_plot, render_histogram};
use crate::pipeline::{count_categories, numeric_values, ColumnProfile};

/// Render every distribution chart and return how many were drawn.
pub fn render_distributions(
    df: &DataFrame,
    profile: &ColumnProfile,
    bins: usize,
    top_categories: usize,
) -> Result<usize> {
    let mut rendered = 0;

    for name in profile.present_numeric(df) {
        println!(
            "  {} {}",
            style(&name).white().bold(),
            style("(histogram)").dim()
        );
        match numeric_values(df, &name)? {
            Some(values) => {
                render_histogram(&values, bins);
                rendered += 1;
            }
            None => println!("    {}", style("(no non-null values)").dim()),
        }
        println!();
    }

    let labelled = profile
        .present_categorical(df)
        .into_iter()
        .chain(profile.present_ordinal(df));
    for name in labelled {
        println!(
            "  {} {}",
            style(&name).white().bold(),
            style("(count plot)").dim()
        );
        match count_categories(df, &name)? {
            Some(counts) => {
                render_count_plot(&counts, top_categories);
                rendered += 1;
            }
            None => println!("    {}", style("(no non-null values)").dim()),
        }
        println!();
    }

    Ok(rendered)
}
