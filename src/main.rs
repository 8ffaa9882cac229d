//! Mob CLI - target-based system builder and installer
//!
//! Entry point for the mob command-line application.

use clap::Parser;

use mob::cli::output::display_error;
use mob::cli::Cli;

fn main() {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    // Run the command; every fatal condition exits with status 1
    if let Err(e) = cli.run() {
        display_error(&e);
        std::process::exit(1);
    }
}
