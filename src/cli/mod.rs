//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use anyhow::Result;
use clap::Parser;

use commands::Commands;

/// Mob - target-based system builder and installer
///
/// Resolves target dependencies from mobfiles and runs the configured
/// build, install, and device commands in order.
#[derive(Parser, Debug)]
#[command(name = "mob")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        self.command.run()
    }
}
