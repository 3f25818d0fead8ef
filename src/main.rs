//! Flightscope: Flight Cancellation EDA Tool
//!
//! A command-line tool for exploring a cleaned flight-cancellation
//! dataset: descriptive statistics, terminal charts, and a one-row
//! insight summary written back to CSV.

mod cli;
mod pipeline;
mod report;
mod utils;

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use console::style;

use cli::Cli;
use pipeline::{
    build_insight_report, count_categories, display_category_counts, display_numeric_summaries,
    ensure_binary_target, load_dataset_with_progress, summarize_numeric, ColumnProfile,
};
use report::{
    export_json_report, render_distributions, render_relationships, render_target_views,
    write_insights_csv, EdaSummary, ReportParams,
};
use utils::{
    create_spinner, finish_with_success, finish_with_warning, print_banner, print_completion,
    print_config, print_info, print_step_header, print_step_time, print_success, print_warning,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output_path = cli.output_path();

    // Print styled banner
    print_banner(env!("CARGO_PKG_VERSION"));

    // Print configuration card
    print_config(
        &cli.input,
        &cli.target,
        &output_path,
        cli.bins,
        cli.scatter_threshold,
    );

    // Load dataset (with progress bar for CSV files)
    let step_start = Instant::now();
    println!(); // Blank line before progress bar
    let (df, rows, cols, memory_mb) =
        load_dataset_with_progress(&cli.input, cli.infer_schema_length)?;
    print_success("Dataset loaded");

    // Display statistics (instant since data is already collected)
    println!("\n    {} Dataset Statistics:", style("✧").cyan());
    println!("      Rows: {}", rows);
    println!("      Columns: {}", cols);
    println!("      Estimated memory: {:.2} MB", memory_mb);

    // Everything downstream groups by the target, so verify it up front
    ensure_binary_target(&df, &cli.target)?;

    let profile = ColumnProfile::with_target(&cli.target);
    let skipped = profile.missing_columns(&df);
    if !skipped.is_empty() {
        print_info(&format!(
            "Skipping {} expected column(s) not in this file: {}",
            skipped.len(),
            skipped.join(", ")
        ));
    }

    let mut summary = EdaSummary::new(rows, cols);
    summary.numeric_profiled = profile.present_numeric(&df).len();
    summary.categorical_profiled = profile.present_categorical(&df).len();
    summary.skipped_columns = skipped;
    summary.load_time = step_start.elapsed();
    print_step_time(summary.load_time);

    // Step 1: Descriptive statistics
    print_step_header(1, "Descriptive Statistics");

    let step_start = Instant::now();
    let mut numeric_summaries = Vec::new();
    for name in profile
        .present_numeric(&df)
        .into_iter()
        .chain(profile.present_ordinal(&df))
    {
        if let Some(stats) = summarize_numeric(&df, &name)? {
            numeric_summaries.push(stats);
        }
    }
    display_numeric_summaries(&numeric_summaries);

    for name in profile.present_categorical(&df) {
        if let Some(counts) = count_categories(&df, &name)? {
            display_category_counts(&counts, cli.top_categories);
        }
    }
    summary.describe_time = step_start.elapsed();
    print_step_time(summary.describe_time);

    // Step 2: Distribution charts
    print_step_header(2, "Distributions");

    let step_start = Instant::now();
    if cli.no_charts {
        print_info("Charts disabled with --no-charts");
    } else {
        println!();
        summary.charts_rendered +=
            render_distributions(&df, &profile, cli.bins, cli.top_categories)?;
    }
    let distributions_elapsed = step_start.elapsed();
    summary.charts_time += distributions_elapsed;
    print_step_time(distributions_elapsed);

    // Step 3: Relationship charts
    print_step_header(3, "Relationships");

    let step_start = Instant::now();
    if cli.no_charts {
        print_info("Charts disabled with --no-charts");
    } else {
        println!();
        summary.charts_rendered += render_relationships(&df, &profile, cli.scatter_threshold)?;
    }
    let relationships_elapsed = step_start.elapsed();
    summary.charts_time += relationships_elapsed;
    print_step_time(relationships_elapsed);

    // Step 4: Cancellation breakdown
    print_step_header(4, "Cancellation Breakdown");

    let step_start = Instant::now();
    let spinner = create_spinner("Aggregating cancellation insights...");
    let insight_report = build_insight_report(&df, &profile)?;
    finish_with_success(
        &spinner,
        &format!("Computed {} insight(s)", insight_report.len()),
    );

    if !cli.no_charts {
        println!();
        summary.charts_rendered += render_target_views(&df, &profile, &insight_report)?;
    }
    let breakdown_elapsed = step_start.elapsed();
    summary.charts_time += breakdown_elapsed;
    print_step_time(breakdown_elapsed);

    // Step 5: Export insights
    print_step_header(5, "Export Insights");

    let step_start = Instant::now();
    let spinner = create_spinner("Writing insight summary...");
    // A failed export is reported but never aborts the run
    match write_insights_csv(&insight_report, &output_path) {
        Ok(()) => {
            finish_with_success(&spinner, &format!("Saved to {}", output_path.display()));
            summary.insights_exported = insight_report.len();
            summary.output_path = Some(output_path.display().to_string());
        }
        Err(e) => {
            finish_with_warning(&spinner, "Insight export failed");
            print_warning(&format!("{:#}", e));
        }
    }

    if cli.json_report {
        let json_path = cli.json_report_path();
        let input_display = cli.input.display().to_string();
        let params = ReportParams {
            input_file: &input_display,
            target_column: &cli.target,
            rows,
            columns: cols,
        };
        match export_json_report(&insight_report, &json_path, &params) {
            Ok(()) => print_success(&format!("JSON report saved to {}", json_path.display())),
            Err(e) => print_warning(&format!("{:#}", e)),
        }
    }
    summary.export_time = step_start.elapsed();
    print_step_time(summary.export_time);

    // Display summary
    summary.display();

    // Final completion message
    print_completion();

    Ok(())
}
