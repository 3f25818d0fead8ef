//! Terminal styling utilities for a modern, visually appealing TUI

use console::{style, Emoji};
use std::path::Path;
use std::time::Duration;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");
pub static PLANE: Emoji<'_, '_> = Emoji("✈️  ", ">> ");
pub static CHART: Emoji<'_, '_> = Emoji("📊 ", "");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static TARGET: Emoji<'_, '_> = Emoji("🎯 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");
pub static LINK: Emoji<'_, '_> = Emoji("🔗 ", "");

/// Print the application banner with ASCII art
pub fn print_banner(version: &str) {
    let banner = r#"
    ███████╗██╗     ██╗ ██████╗ ██╗  ██╗████████╗
    ██╔════╝██║     ██║██╔════╝ ██║  ██║╚══██╔══╝
    █████╗  ██║     ██║██║  ███╗███████║   ██║
    ██╔══╝  ██║     ██║██║   ██║██╔══██║   ██║
    ██║     ███████╗██║╚██████╔╝██║  ██║   ██║
    ╚═╝     ╚══════╝╚═╝ ╚═════╝ ╚═╝  ╚═╝   ╚═╝
              ███████╗ ██████╗ ██████╗ ██████╗ ███████╗
              ██╔════╝██╔════╝██╔═══██╗██╔══██╗██╔════╝
              ███████╗██║     ██║   ██║██████╔╝█████╗
              ╚════██║██║     ██║   ██║██╔═══╝ ██╔══╝
              ███████║╚██████╗╚██████╔╝██║     ███████╗
              ╚══════╝ ╚═════╝ ╚═════╝ ╚═╝     ╚══════╝
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {} {}",
        style("✈").magenta().bold(),
        style("Exploratory analysis for grounded flights").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print configuration card
pub fn print_config(
    input: &Path,
    target: &str,
    output: &Path,
    bins: usize,
    scatter_threshold: f64,
) {
    let box_width = 56;
    let line = "─".repeat(box_width - 2);

    println!("    ┌{}┐", line);
    println!(
        "    │ {}{}│",
        style("⚙️  Configuration").cyan().bold(),
        " ".repeat(box_width - 20)
    );
    println!("    ├{}┤", line);
    println!(
        "    │  {} Input:  {:<39}│",
        FOLDER,
        truncate_path(input, 38)
    );
    println!(
        "    │  {} Target: {:<39}│",
        TARGET,
        truncate_string(target, 38)
    );
    println!(
        "    │  {} Output: {:<39}│",
        SAVE,
        truncate_path(output, 38)
    );
    println!("    ├{}┤", line);
    println!(
        "    │  {} Histogram bins:        {:<24}│",
        CHART,
        style(bins).yellow()
    );
    println!(
        "    │  {} Scatter threshold:     {:<24}│",
        LINK,
        style(format!("{:.2}", scatter_threshold)).yellow()
    );
    println!("    └{}┘", line);
    println!();
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print a warning message for non-fatal problems
pub fn print_warning(message: &str) {
    println!("    {} {}", WARN, style(message).yellow());
}

/// Print how long a step took
pub fn print_step_time(elapsed: Duration) {
    println!(
        "    {}",
        style(format!("⏱  completed in {:.2}s", elapsed.as_secs_f64())).dim()
    );
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        PLANE,
        style("Flightscope analysis complete!").green().bold()
    );
    println!();
}

/// Print a styled count message
pub fn print_count(description: &str, count: usize, threshold_info: Option<&str>) {
    if let Some(info) = threshold_info {
        println!(
            "      Found {} {} {}",
            style(count).yellow().bold(),
            description,
            style(info).dim()
        );
    } else {
        println!(
            "      Found {} {}",
            style(count).yellow().bold(),
            description
        );
    }
}

// Helper functions

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

fn truncate_string(s: &str, max_len: usize) -> String {
    // Count chars, not bytes: a byte offset can land inside a
    // multi-byte character and panic on the slice
    let total = s.chars().count();
    if total <= max_len {
        s.to_string()
    } else {
        let keep = max_len.saturating_sub(3);
        let tail: String = s.chars().skip(total - keep).collect();
        format!("...{}", tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_short_passthrough() {
        assert_eq!(truncate_string("flights.csv", 38), "flights.csv");
    }

    #[test]
    fn test_truncate_string_keeps_tail() {
        let truncated = truncate_string("/data/archive/2024/flights.csv", 14);
        assert_eq!(truncated, "...flights.csv");
        assert_eq!(truncated.chars().count(), 14);
    }

    #[test]
    fn test_truncate_string_multibyte() {
        let path = "/données/vols/überwachung_flüge_2024.csv";
        let truncated = truncate_string(path, 20);
        assert!(truncated.starts_with("..."));
        assert_eq!(truncated.chars().count(), 20);
        assert!(truncated.ends_with("flüge_2024.csv"));
    }

    #[test]
    fn test_truncate_path_display() {
        let path = Path::new("/very/long/nested/path/to/the/flight_data.csv");
        let truncated = truncate_path(path, 20);
        assert_eq!(truncated.chars().count(), 20);
        assert!(truncated.ends_with("flight_data.csv"));
    }
}
