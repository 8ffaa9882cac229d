//! Error types for mob
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

use crate::core::config::ConfigKind;

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Backing mobfile does not exist
    #[error("Could not find the config file `{}`", path.display())]
    NotFound { path: PathBuf },

    /// Backing mobfile exists but is not valid INI
    #[error("Could not parse the config file `{}`: {error}", path.display())]
    Parse { path: PathBuf, error: String },
}

/// Dependency resolution errors
#[derive(Error, Debug)]
pub enum ResolveError {
    /// A project target depends on itself along its ancestry path
    #[error("Circular dependency detected between `{target}` and `{dependency}`")]
    CircularDependency { target: String, dependency: String },
}

/// External command execution errors
#[derive(Error, Debug)]
pub enum ExecError {
    /// The shell could not be spawned at all
    #[error("Failed to launch command `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    /// The command ran and completed with a non-zero status
    #[error("The command `{command}` returned exit code {status}")]
    Failed { command: String, status: i32 },
}

/// Top-level mob error type
#[derive(Error, Debug)]
pub enum MobError {
    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Resolution error
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Execution error
    #[error(transparent)]
    Exec(#[from] ExecError),

    /// Malformed `--args` mapping literal
    #[error("Could not parse target arguments `{value}`: {error}")]
    TargetArgs { value: String, error: String },

    /// A requested name matches no discovered mobfile
    #[error("Unknown {kind} `{name}` (no mobfile found in the search path)")]
    UnknownName { kind: ConfigKind, name: String },
}
