//! Run summary report generation

use std::time::Duration;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

/// Summary of one analysis run, filled in step by step
#[derive(Debug, Default)]
pub struct EdaSummary {
    pub rows: usize,
    pub columns: usize,
    pub numeric_profiled: usize,
    pub categorical_profiled: usize,
    pub skipped_columns: Vec<String>,
    pub charts_rendered: usize,
    pub insights_exported: usize,
    pub output_path: Option<String>,
    pub load_time: Duration,
    pub describe_time: Duration,
    pub charts_time: Duration,
    pub export_time: Duration,
}

impl EdaSummary {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            ..Default::default()
        }
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("ANALYSIS SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("📁 Rows x Columns"),
            Cell::new(format!("{} x {}", self.rows, self.columns)),
        ]);

        table.add_row(vec![
            Cell::new("🔢 Numeric Profiled"),
            Cell::new(self.numeric_profiled),
        ]);

        table.add_row(vec![
            Cell::new("🏷️  Categorical Profiled"),
            Cell::new(self.categorical_profiled),
        ]);

        table.add_row(vec![
            Cell::new("⏭️  Skipped Columns"),
            Cell::new(self.skipped_columns.len()).fg(if self.skipped_columns.is_empty() {
                Color::White
            } else {
                Color::Yellow
            }),
        ]);

        table.add_row(vec![
            Cell::new("📊 Charts Rendered"),
            Cell::new(self.charts_rendered),
        ]);

        table.add_row(vec![
            Cell::new("💡 Insights Exported"),
            Cell::new(self.insights_exported).fg(if self.insights_exported > 0 {
                Color::Green
            } else {
                Color::Red
            }),
        ]);

        if let Some(path) = &self.output_path {
            table.add_row(vec![
                Cell::new("💾 Output"),
                Cell::new(path)
                    .fg(Color::Green)
                    .add_attribute(Attribute::Bold),
            ]);
        }

        let total = self.load_time + self.describe_time + self.charts_time + self.export_time;
        table.add_row(vec![
            Cell::new("⏱️  Total Time"),
            Cell::new(format!("{:.2}s", total.as_secs_f64())).fg(Color::Cyan),
        ]);

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }

        if !self.skipped_columns.is_empty() {
            println!();
            println!(
                "    {} {}",
                style("📝").cyan(),
                style("SKIPPED COLUMNS").white().bold()
            );
            println!("    {}", style("─".repeat(50)).dim());
            println!();
            println!(
                "      {} {}:",
                style("Expected but not found").yellow(),
                style(format!("({})", self.skipped_columns.len())).dim()
            );
            for column in &self.skipped_columns {
                println!("        {} {}", style("•").dim(), column);
            }
        }
    }
}
