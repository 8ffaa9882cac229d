//! Build command implementation
//!
//! Implements `mob build`: validates the requested names against the
//! discovered mobfiles, seeds target arguments, expands and linearizes the
//! dependency tree, and runs each target's clean/configure/build commands.

use anyhow::Result;

use crate::cli::output;
use crate::core::config::ConfigKind;
use crate::core::device::Device;
use crate::core::options::{self, BuildType, RunOptions};
use crate::core::orchestrator::{Operation, Orchestrator};
use crate::core::resolver;
use crate::core::target;
use crate::error::MobError;
use crate::infra::discovery::Mobfiles;
use crate::infra::runner::ShellRunner;

/// Build options
#[derive(Debug)]
pub struct BuildOptions {
    /// The device target
    pub device: String,
    /// Requested project targets, in CLI order
    pub targets: Vec<String>,
    /// Build flavor, seeds `Main.BuildType` when `--args` is absent
    pub build_type: BuildType,
    /// Raw `--args` mapping literal
    pub args: Option<String>,
    /// Invocation flags
    pub run: RunOptions,
}

/// Execute the build command
pub fn execute(options: &BuildOptions) -> Result<()> {
    let mobfiles = Mobfiles::discover();

    if !mobfiles.is_device(&options.device) {
        return Err(MobError::UnknownName {
            kind: ConfigKind::Device,
            name: options.device.clone(),
        }
        .into());
    }
    for name in &options.targets {
        if !mobfiles.is_project(name) {
            return Err(MobError::UnknownName {
                kind: ConfigKind::Project,
                name: name.clone(),
            }
            .into());
        }
    }

    let device = Device::load(&mobfiles, &options.device)?;

    // --args replaces the default seed map entirely, not merged.
    let target_args = options::build_seed_args(options.args.as_deref(), options.build_type)?;

    let roots = target::expand_requested(&mobfiles, &options.targets, &target_args, &device)?;
    let order: Vec<_> = if options.run.no_deps {
        roots.iter().collect()
    } else {
        resolver::linearize(&roots)
    };
    tracing::info!("Building {} target(s) for {}", order.len(), device.name());

    let runner = ShellRunner::new(&options.run);
    Orchestrator::new(&device, &options.run, &runner).run_targets(Operation::Build, &order)?;

    output::print_success("Build complete!");
    Ok(())
}
