//! Mob - target-based system builder and installer
//!
//! This library provides the core functionality for resolving named build
//! and install targets against a device, linearizing their dependency
//! trees, and orchestrating the shell commands their configuration derives.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Business logic (config cascade, target model, resolver, orchestrator)
//! - [`infra`] - Infrastructure layer (mobfile discovery, process execution)
//! - [`error`] - Error types and handling

pub mod cli;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
