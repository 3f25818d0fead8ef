//! Cancellation breakdown views
//!
//! Everything in this module reads the target against the other
//! columns: rate bars per category, a class-means table, and paired
//! box strips showing how each numeric column shifts between completed
//! and cancelled flights.

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement, Table};
use console::style;
use polars::prelude::DataFrame;

use super::charts::{render_box_strip, render_rate_bars, FiveNumber};
use crate::pipeline::{class_split_values, target_values, ClassMean, ColumnProfile, InsightReport};

/// Render every view of the target, returning how many charts were
/// drawn. The class-means table is printed but not counted as a chart.
pub fn render_target_views(
    df: &DataFrame,
    profile: &ColumnProfile,
    report: &InsightReport,
) -> Result<usize> {
    let mut rendered = 0;

    for name in profile.present_categorical(df) {
        let rates: Vec<(String, f64)> = report
            .category_rates
            .iter()
            .filter(|r| r.column == name)
            .map(|r| (r.category.clone(), r.rate))
            .collect();
        if rates.is_empty() {
            continue;
        }
        println!(
            "  {} {}",
            style(&name).white().bold(),
            style("(cancellation rate)").dim()
        );
        render_rate_bars(&rates);
        println!();
        rendered += 1;
    }

    if !report.class_means.is_empty() {
        println!("  {}", style("Numeric means by outcome").white().bold());
        display_class_means_table(&report.class_means);
        println!();
    }

    let target = target_values(df, &profile.target)?;
    for name in profile.present_numeric(df) {
        if let Some((mut completed, mut cancelled)) = class_split_values(df, &name, &target)? {
            completed.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            cancelled.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            let five_completed = FiveNumber::from_sorted(&completed);
            let five_cancelled = FiveNumber::from_sorted(&cancelled);

            // Shared scale across both classes so the strips compare
            let mut lo = f64::INFINITY;
            let mut hi = f64::NEG_INFINITY;
            for five in five_completed.iter().chain(five_cancelled.iter()) {
                lo = lo.min(five.min);
                hi = hi.max(five.max);
            }
            if !lo.is_finite() || !hi.is_finite() {
                continue;
            }

            println!(
                "  {} {}",
                style(&name).white().bold(),
                style("(by outcome)").dim()
            );
            if let Some(five) = five_completed {
                render_box_strip("Completed", &five, lo, hi);
            }
            if let Some(five) = five_cancelled {
                render_box_strip("Cancelled", &five, lo, hi);
            }
            println!();
            rendered += 1;
        }
    }

    Ok(rendered)
}

/// One row per numeric column, class means side by side
fn display_class_means_table(means: &[ClassMean]) {
    let mut rows: Vec<(String, [Option<f64>; 2])> = Vec::new();
    for mean in means {
        let idx = mean.cancelled as usize;
        match rows.iter_mut().find(|(column, _)| column == &mean.column) {
            Some((_, cells)) => cells[idx] = Some(mean.mean),
            None => {
                let mut cells = [None, None];
                cells[idx] = Some(mean.mean);
                rows.push((mean.column.clone(), cells));
            }
        }
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Column")
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
            Cell::new("Mean (completed)")
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
            Cell::new("Mean (cancelled)")
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
        ]);

    let format_mean =
        |cell: Option<f64>| cell.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "-".into());
    for (column, cells) in rows {
        table.add_row(vec![
            Cell::new(column),
            Cell::new(format_mean(cells[0])),
            Cell::new(format_mean(cells[1])),
        ]);
    }

    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}
