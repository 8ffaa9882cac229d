//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod build;
pub mod device;
pub mod install;

use anyhow::Result;
use clap::Subcommand;

use crate::core::options::{BuildType, RunOptions};

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the specified target(s)
    Build {
        /// Display elapsed time for each command
        #[arg(long)]
        time: bool,

        /// Turn off command output
        #[arg(long)]
        quiet: bool,

        /// Turn off dependency checking
        #[arg(long = "no-deps")]
        no_deps: bool,

        /// Turn off the configure step
        #[arg(long = "no-config")]
        no_config: bool,

        /// Do a clean build
        #[arg(long)]
        clean: bool,

        /// Type of build
        #[arg(long = "type", value_enum, default_value_t = BuildType::Release)]
        build_type: BuildType,

        /// JSON object of arguments to pass along to the target(s)
        #[arg(long, value_name = "{\"key\": \"value\", ...}")]
        args: Option<String>,

        /// The device target
        device: String,

        /// One or more build target(s)
        #[arg(required = true)]
        targets: Vec<String>,
    },

    /// Install the specified target(s)
    Install {
        /// Display elapsed time for each command
        #[arg(long)]
        time: bool,

        /// Turn off command output
        #[arg(long)]
        quiet: bool,

        /// Turn off dependency checking
        #[arg(long = "no-deps")]
        no_deps: bool,

        /// Type of build
        #[arg(long = "type", value_enum, default_value_t = BuildType::Release)]
        build_type: BuildType,

        /// JSON object of arguments to pass along to the target(s)
        #[arg(long, value_name = "{\"key\": \"value\", ...}")]
        args: Option<String>,

        /// The device target
        device: String,

        /// One or more install target(s)
        #[arg(required = true)]
        targets: Vec<String>,
    },

    /// Commands for the specified device
    Device {
        /// Display elapsed time for each command
        #[arg(long)]
        time: bool,

        /// Turn off command output
        #[arg(long)]
        quiet: bool,

        /// Connect the specified device
        #[arg(long, conflicts_with = "disconnect")]
        connect: bool,

        /// Disconnect the specified device
        #[arg(long)]
        disconnect: bool,

        /// The device target
        device: String,
    },
}

impl Commands {
    /// Execute the command
    pub fn run(self) -> Result<()> {
        match self {
            Self::Build {
                time,
                quiet,
                no_deps,
                no_config,
                clean,
                build_type,
                args,
                device,
                targets,
            } => {
                let options = build::BuildOptions {
                    device,
                    targets,
                    build_type,
                    args,
                    run: RunOptions {
                        time,
                        quiet,
                        no_deps,
                        no_config,
                        clean,
                    },
                };
                build::execute(&options)
            }
            Self::Install {
                time,
                quiet,
                no_deps,
                build_type: _,
                args,
                device,
                targets,
            } => {
                let options = install::InstallOptions {
                    device,
                    targets,
                    args,
                    run: RunOptions {
                        time,
                        quiet,
                        no_deps,
                        ..RunOptions::default()
                    },
                };
                install::execute(&options)
            }
            Self::Device {
                time,
                quiet,
                connect,
                disconnect,
                device,
            } => {
                let options = device::DeviceOptions {
                    device,
                    connect,
                    disconnect,
                    run: RunOptions {
                        time,
                        quiet,
                        ..RunOptions::default()
                    },
                };
                device::execute(&options)
            }
        }
    }
}
