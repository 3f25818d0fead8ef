//! Terminal chart primitives
//!
//! Unicode block renderers shared by the distribution, relationship and
//! cancellation views. Everything draws straight to stdout with the
//! same four-space indent the tables use, so charts and tables line up
//! in the step output.

use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement, Table};
use console::style;

use crate::pipeline::{quantile_sorted, CategoryCounts, CorrelationMatrix};

/// Width of the widest bar, in terminal cells
const BAR_WIDTH: usize = 40;

/// Scatter grid dimensions
const SCATTER_WIDTH: usize = 44;
const SCATTER_HEIGHT: usize = 12;

/// Clip a label to `max_len` visible characters, keeping the head
fn clip_label(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}

/// Print a horizontal histogram of `values` over `bins` equal-width bins.
///
/// A constant column collapses to a single full-width bar. Values are
/// assumed finite; the caller filters NaN before rendering.
pub fn render_histogram(values: &[f64], bins: usize) {
    if values.is_empty() {
        return;
    }
    let bins = bins.max(1);

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if (max - min).abs() < f64::EPSILON {
        let bar = "█".repeat(BAR_WIDTH);
        println!(
            "    {:>9.2} ..{:>9.2}  {} {}",
            min,
            max,
            style(bar).cyan(),
            style(values.len()).dim()
        );
        return;
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    let peak = counts.iter().copied().max().unwrap_or(1).max(1);
    for (i, &count) in counts.iter().enumerate() {
        let lo = min + i as f64 * width;
        let hi = lo + width;
        let len = count * BAR_WIDTH / peak;
        let bar = if count > 0 && len == 0 {
            "▏".to_string()
        } else {
            "█".repeat(len)
        };
        println!(
            "    {:>9.2} ..{:>9.2}  {} {}",
            lo,
            hi,
            style(bar).cyan(),
            style(count).dim()
        );
    }
}

/// Print a horizontal bar chart of category frequencies, most frequent
/// first, clipped to the `top` largest groups.
pub fn render_count_plot(counts: &CategoryCounts, top: usize) {
    let shown = counts.counts.iter().take(top.max(1));
    let peak = counts
        .counts
        .iter()
        .take(top.max(1))
        .map(|(_, n)| *n)
        .max()
        .unwrap_or(1)
        .max(1);

    for (label, count) in shown {
        let len = count * BAR_WIDTH / peak;
        let bar = if *count > 0 && len == 0 {
            "▏".to_string()
        } else {
            "█".repeat(len)
        };
        println!(
            "    {:<18} {} {}",
            clip_label(label, 18),
            style(bar).cyan(),
            style(count).dim()
        );
    }

    let hidden = counts.counts.len().saturating_sub(top.max(1));
    if hidden > 0 {
        println!("    {}", style(format!("(+{} more)", hidden)).dim());
    }
}

/// Print the correlation matrix as a colored table. Cells show the
/// coefficient with sign; strong values stand out, the diagonal fades.
pub fn render_heatmap(matrix: &CorrelationMatrix) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("")];
    for name in &matrix.columns {
        header.push(
            Cell::new(clip_label(name, 14))
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
        );
    }
    table.set_header(header);

    for (i, name) in matrix.columns.iter().enumerate() {
        let mut row = vec![Cell::new(clip_label(name, 14))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold)];
        for j in 0..matrix.len() {
            let value = matrix.get(i, j);
            let cell = Cell::new(format!("{:+.2}", value));
            let cell = if i == j {
                cell.fg(Color::DarkGrey)
            } else if value >= 0.7 {
                cell.fg(Color::Green).add_attribute(Attribute::Bold)
            } else if value <= -0.7 {
                cell.fg(Color::Red).add_attribute(Attribute::Bold)
            } else if value.abs() >= 0.3 {
                cell.fg(Color::Yellow)
            } else {
                cell.fg(Color::White)
            };
            row.push(cell);
        }
        table.add_row(row);
    }

    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}

/// Print a density scatter of two row-aligned value slices.
///
/// Each grid cell maps its point count to a glyph: one point draws a
/// dot, a handful a bullet, a pile a full block.
pub fn render_scatter(xs: &[f64], ys: &[f64]) {
    if xs.len() != ys.len() || xs.is_empty() {
        return;
    }

    let x_min = xs.iter().copied().fold(f64::INFINITY, f64::min);
    let x_max = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let y_min = ys.iter().copied().fold(f64::INFINITY, f64::min);
    let y_max = ys.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let x_span = if (x_max - x_min).abs() < f64::EPSILON {
        1.0
    } else {
        x_max - x_min
    };
    let y_span = if (y_max - y_min).abs() < f64::EPSILON {
        1.0
    } else {
        y_max - y_min
    };

    let mut grid = vec![[0usize; SCATTER_WIDTH]; SCATTER_HEIGHT];
    for (&x, &y) in xs.iter().zip(ys.iter()) {
        let cx = (((x - x_min) / x_span) * (SCATTER_WIDTH - 1) as f64).round() as usize;
        let cy = (((y - y_min) / y_span) * (SCATTER_HEIGHT - 1) as f64).round() as usize;
        // Row 0 is the top of the plot
        grid[SCATTER_HEIGHT - 1 - cy.min(SCATTER_HEIGHT - 1)][cx.min(SCATTER_WIDTH - 1)] += 1;
    }

    let border = "─".repeat(SCATTER_WIDTH);
    println!("    {}", style(format!("┌{}┐", border)).dim());
    for (i, row) in grid.iter().enumerate() {
        let glyphs: String = row
            .iter()
            .map(|&n| match n {
                0 => ' ',
                1 => '·',
                2..=4 => '•',
                _ => '█',
            })
            .collect();
        let label = if i == 0 {
            format!(" {:.2}", y_max)
        } else if i == SCATTER_HEIGHT - 1 {
            format!(" {:.2}", y_min)
        } else {
            String::new()
        };
        println!(
            "    {}{}{}{}",
            style("│").dim(),
            style(glyphs).cyan(),
            style("│").dim(),
            style(label).dim()
        );
    }
    println!("    {}", style(format!("└{}┘", border)).dim());
    println!(
        "    {}",
        style(format!(
            " {:<width$}{:.2}",
            format!("{:.2}", x_min),
            x_max,
            width = SCATTER_WIDTH.saturating_sub(5)
        ))
        .dim()
    );
}

/// Five-number summary backing one box strip
#[derive(Debug, Clone, Copy)]
pub struct FiveNumber {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl FiveNumber {
    /// Compute from an ascending-sorted slice. `None` when empty.
    pub fn from_sorted(sorted: &[f64]) -> Option<Self> {
        let first = *sorted.first()?;
        let last = *sorted.last()?;
        Some(Self {
            min: first,
            q1: quantile_sorted(sorted, 0.25),
            median: quantile_sorted(sorted, 0.5),
            q3: quantile_sorted(sorted, 0.75),
            max: last,
        })
    }
}

/// Print one box-plot strip on a shared horizontal scale.
///
/// Whisker spans min to max, the box covers the interquartile range and
/// the heavy bar marks the median. Both class strips of one column use
/// the same `scale_min`/`scale_max` so their positions compare.
pub fn render_box_strip(label: &str, five: &FiveNumber, scale_min: f64, scale_max: f64) {
    let span = if (scale_max - scale_min).abs() < f64::EPSILON {
        1.0
    } else {
        scale_max - scale_min
    };
    let pos = |v: f64| -> usize {
        ((((v - scale_min) / span) * (BAR_WIDTH - 1) as f64).round() as usize).min(BAR_WIDTH - 1)
    };

    let lo = pos(five.min);
    let q1 = pos(five.q1);
    let med = pos(five.median);
    let q3 = pos(five.q3);
    let hi = pos(five.max);

    let mut cells = vec![' '; BAR_WIDTH];
    for cell in cells.iter_mut().take(hi + 1).skip(lo) {
        *cell = '─';
    }
    for cell in cells.iter_mut().take(q3 + 1).skip(q1) {
        *cell = '▓';
    }
    cells[lo] = '├';
    cells[hi] = '┤';
    cells[med] = '┃';

    let strip: String = cells.into_iter().collect();
    println!(
        "    {:<12} {} {}",
        label,
        style(strip).cyan(),
        style(format!("med {:.2}", five.median)).dim()
    );
}

/// Print rate bars on a fixed 0..100% scale, colored by severity.
pub fn render_rate_bars(rates: &[(String, f64)]) {
    for (label, rate) in rates {
        let len = ((rate.clamp(0.0, 1.0)) * BAR_WIDTH as f64).round() as usize;
        let bar = if *rate > 0.0 && len == 0 {
            "▏".to_string()
        } else {
            "█".repeat(len)
        };
        let colored = if *rate >= 0.5 {
            style(bar).red()
        } else if *rate >= 0.25 {
            style(bar).yellow()
        } else {
            style(bar).green()
        };
        println!(
            "    {:<18} {} {}",
            clip_label(label, 18),
            colored,
            style(format!("{:.1}%", rate * 100.0)).dim()
        );
    }
}
