//! Output formatting and progress indicators
//!
//! Utilities for displaying progress, status glyphs, and formatted
//! messages to the user. Diagnostic output goes through `tracing`; this
//! module is for the user-facing surface only.

use indicatif::{ProgressBar, ProgressStyle};

/// Create a spinner for a command whose output is suppressed
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.blue} {msg}")
            .expect("Invalid spinner template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Step prefix
    pub const STEP: &str = "→";
}

/// Announce an orchestration step (clean/configure/build/install/connect)
pub fn print_step(message: &str) {
    println!("{} {message}", status::STEP);
}

/// Report overall success
pub fn print_success(message: &str) {
    println!("{} {message}", status::SUCCESS);
}

/// Display a fatal error on stderr
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} ERROR: {error}", status::ERROR);
}
