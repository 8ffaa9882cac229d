//! Run options and target arguments
//!
//! The flags that steer one invocation, threaded explicitly through the
//! orchestrator and the command runner, plus parsing of the `--args`
//! key/value mapping literal.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::MobError;

/// Build flavor selected with `--type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum BuildType {
    /// Debug build
    Debug,
    /// Release build
    #[default]
    Release,
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => write!(f, "debug"),
            Self::Release => write!(f, "release"),
        }
    }
}

/// Flags for one invocation, immutable once parsed
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Display elapsed time for each command
    pub time: bool,
    /// Suppress command output
    pub quiet: bool,
    /// Disable dependency checking; only top-level targets run
    pub no_deps: bool,
    /// Skip the configure step
    pub no_config: bool,
    /// Run the clean step before building
    pub clean: bool,
}

/// Key/value pairs seeded into every top-level target's configuration
pub type TargetArgs = BTreeMap<String, String>;

/// The default seed map for `build` when `--args` is absent
pub fn default_build_args(build_type: BuildType) -> TargetArgs {
    let mut args = TargetArgs::new();
    args.insert("Main.BuildType".to_string(), build_type.to_string());
    args
}

/// Seed map for `build`: the parsed `--args` literal when given, the
/// default `Main.BuildType` map otherwise. An explicit literal replaces
/// the default entirely rather than merging with it.
pub fn build_seed_args(raw: Option<&str>, build_type: BuildType) -> Result<TargetArgs, MobError> {
    match raw {
        Some(raw) => parse_target_args(raw),
        None => Ok(default_build_args(build_type)),
    }
}

/// Parse a `--args` mapping literal.
///
/// The literal is a JSON object; string values are taken verbatim, numbers
/// and booleans are coerced to their textual forms. The parsed map replaces
/// the default seed map entirely rather than merging with it.
pub fn parse_target_args(raw: &str) -> Result<TargetArgs, MobError> {
    let parse_error = |error: String| MobError::TargetArgs {
        value: raw.to_string(),
        error,
    };

    let object: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(raw).map_err(|e| parse_error(e.to_string()))?;

    let mut args = TargetArgs::new();
    for (key, value) in object {
        let value = match value {
            serde_json::Value::String(s) => s,
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Bool(b) => b.to_string(),
            other => {
                return Err(parse_error(format!(
                    "value for `{key}` must be a string, number, or boolean, got `{other}`"
                )))
            }
        };
        args.insert(key, value);
    }
    Ok(args)
}
