//! Command orchestration
//!
//! Walks a linearized target list and dispatches the relevant derived
//! command per node per operation, delegating execution to a
//! [`CommandRunner`]. The first non-zero exit code aborts the entire
//! remaining sequence; completed steps are never rolled back.

use crate::core::device::Device;
use crate::core::options::RunOptions;
use crate::core::target::TargetNode;
use crate::error::{ExecError, MobError};
use crate::infra::runner::CommandRunner;

use crate::cli::output;

/// The operation requested for this invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Clean/configure/build project targets
    Build,
    /// Run install targets' install commands
    Install,
}

/// Walks targets in order and executes their derived commands
pub struct Orchestrator<'a, R: CommandRunner> {
    device: &'a Device,
    options: &'a RunOptions,
    runner: &'a R,
}

impl<'a, R: CommandRunner> Orchestrator<'a, R> {
    /// Create an orchestrator for one invocation
    pub fn new(device: &'a Device, options: &'a RunOptions, runner: &'a R) -> Self {
        Self {
            device,
            options,
            runner,
        }
    }

    /// Process every node in `targets`, in order.
    ///
    /// Project targets act on [`Operation::Build`] only; install targets on
    /// [`Operation::Install`] only. Everything else is a no-op, as is any
    /// step whose derived command is empty.
    pub fn run_targets(
        &self,
        operation: Operation,
        targets: &[&TargetNode],
    ) -> Result<(), MobError> {
        for node in targets {
            match (operation, node) {
                (Operation::Build, TargetNode::Project(target)) => {
                    if self.options.clean && !target.clean_command().is_empty() {
                        self.run_step(
                            &format!("Cleaning {} for {}...", target.name(), self.device.name()),
                            target.clean_command(),
                        )?;
                    }
                    if !self.options.no_config && !target.configure_command().is_empty() {
                        self.run_step(
                            &format!(
                                "Configuring {} for {}...",
                                target.name(),
                                self.device.name()
                            ),
                            target.configure_command(),
                        )?;
                    }
                    if !target.build_command().is_empty() {
                        self.run_step(
                            &format!("Building {} for {}...", target.name(), self.device.name()),
                            target.build_command(),
                        )?;
                    }
                }
                (Operation::Install, TargetNode::Install(target)) => {
                    if !target.install_command().is_empty() {
                        self.run_step(
                            &format!(
                                "Installing {} onto {}...",
                                target.name(),
                                self.device.name()
                            ),
                            target.install_command(),
                        )?;
                    }
                }
                // Project targets never install themselves; install targets
                // have nothing to build.
                _ => {}
            }
        }
        Ok(())
    }

    /// Run the device's connect command, if any
    pub fn connect_device(&self) -> Result<(), MobError> {
        if self.device.connect_command().is_empty() {
            tracing::debug!("Device `{}` has no ConnectCommand", self.device.name());
            return Ok(());
        }
        self.run_step(
            &format!("Connecting to {}...", self.device.name()),
            self.device.connect_command(),
        )
    }

    /// Run the device's disconnect command, if any
    pub fn disconnect_device(&self) -> Result<(), MobError> {
        if self.device.disconnect_command().is_empty() {
            tracing::debug!("Device `{}` has no DisconnectCommand", self.device.name());
            return Ok(());
        }
        self.run_step(
            &format!("Disconnecting from {}...", self.device.name()),
            self.device.disconnect_command(),
        )
    }

    fn run_step(&self, message: &str, command: &str) -> Result<(), MobError> {
        output::print_step(message);
        let status = self.runner.run(command).map_err(|source| ExecError::Spawn {
            command: command.to_string(),
            source,
        })?;
        if status != 0 {
            return Err(ExecError::Failed {
                command: command.to_string(),
                status,
            }
            .into());
        }
        Ok(())
    }
}
