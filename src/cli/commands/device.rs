//! Device command implementation
//!
//! Implements `mob device --connect` / `--disconnect`. A device with no
//! configured command for the requested action is a successful no-op.

use anyhow::{bail, Result};

use crate::core::config::ConfigKind;
use crate::core::device::Device;
use crate::core::options::RunOptions;
use crate::core::orchestrator::Orchestrator;
use crate::error::MobError;
use crate::infra::discovery::Mobfiles;
use crate::infra::runner::ShellRunner;

/// Device options
#[derive(Debug)]
pub struct DeviceOptions {
    /// The device target
    pub device: String,
    /// Connect the device
    pub connect: bool,
    /// Disconnect the device
    pub disconnect: bool,
    /// Invocation flags
    pub run: RunOptions,
}

/// Execute the device command
pub fn execute(options: &DeviceOptions) -> Result<()> {
    if !options.connect && !options.disconnect {
        bail!("Either --connect or --disconnect is required");
    }

    let mobfiles = Mobfiles::discover();
    if !mobfiles.is_device(&options.device) {
        return Err(MobError::UnknownName {
            kind: ConfigKind::Device,
            name: options.device.clone(),
        }
        .into());
    }

    let device = Device::load(&mobfiles, &options.device)?;
    let runner = ShellRunner::new(&options.run);
    let orchestrator = Orchestrator::new(&device, &options.run, &runner);

    if options.connect {
        orchestrator.connect_device()?;
    } else {
        orchestrator.disconnect_device()?;
    }
    Ok(())
}
