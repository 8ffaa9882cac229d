//! Install command implementation
//!
//! Implements `mob install`: requested names may be project or install
//! targets. Projects never install themselves; their `Installs` entries do.

use anyhow::Result;

use crate::cli::output;
use crate::core::config::ConfigKind;
use crate::core::device::Device;
use crate::core::options::{self, RunOptions, TargetArgs};
use crate::core::orchestrator::{Operation, Orchestrator};
use crate::core::resolver;
use crate::core::target;
use crate::error::MobError;
use crate::infra::discovery::Mobfiles;
use crate::infra::runner::ShellRunner;

/// Install options
#[derive(Debug)]
pub struct InstallOptions {
    /// The device target
    pub device: String,
    /// Requested project or install targets, in CLI order
    pub targets: Vec<String>,
    /// Raw `--args` mapping literal
    pub args: Option<String>,
    /// Invocation flags
    pub run: RunOptions,
}

/// Execute the install command
pub fn execute(options: &InstallOptions) -> Result<()> {
    let mobfiles = Mobfiles::discover();

    if !mobfiles.is_device(&options.device) {
        return Err(MobError::UnknownName {
            kind: ConfigKind::Device,
            name: options.device.clone(),
        }
        .into());
    }
    for name in &options.targets {
        if !mobfiles.is_project(name) && !mobfiles.is_install(name) {
            return Err(MobError::UnknownName {
                kind: ConfigKind::Install,
                name: name.clone(),
            }
            .into());
        }
    }

    let device = Device::load(&mobfiles, &options.device)?;

    let target_args = match options.args.as_deref() {
        Some(raw) => options::parse_target_args(raw)?,
        None => TargetArgs::new(),
    };

    let roots = target::expand_requested(&mobfiles, &options.targets, &target_args, &device)?;
    let order: Vec<_> = if options.run.no_deps {
        roots.iter().collect()
    } else {
        resolver::linearize(&roots)
    };
    tracing::info!("Installing {} target(s) onto {}", order.len(), device.name());

    let runner = ShellRunner::new(&options.run);
    Orchestrator::new(&device, &options.run, &runner).run_targets(Operation::Install, &order)?;

    output::print_success("Install complete!");
    Ok(())
}
