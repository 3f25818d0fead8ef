//! Spinner helpers using indicatif
//!
//! Every long-running stage (load, aggregate, export) shows an
//! indeterminate spinner; the finish helpers stamp the closing line
//! with a success or warning marker.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Create a spinner for indeterminate progress
pub fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("    {spinner:.cyan} {msg}")
            .unwrap()
            .tick_chars("⣾⣽⣻⢿⡿⣟⣯⣷ "),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Finish a spinner, replacing its line with a success message
pub fn finish_with_success(spinner: &ProgressBar, message: &str) {
    spinner.finish_with_message(format!("✅ {}", message));
}

/// Finish a spinner, replacing its line with a warning message
pub fn finish_with_warning(spinner: &ProgressBar, message: &str) {
    spinner.finish_with_message(format!("⚠️  {}", message));
}
