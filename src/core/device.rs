//! Device configuration
//!
//! A device is a configuration unit describing how to reach a deployment
//! target: its architecture and its connect/disconnect shell commands. Every
//! project and install target is seeded with the device's values under the
//! `device.*` namespace.

use std::collections::BTreeMap;

use crate::core::config::{ConfigKind, TargetConfig};
use crate::error::ConfigError;
use crate::infra::discovery::Mobfiles;

/// A loaded `<name>.mobdevice` unit
#[derive(Debug, Clone)]
pub struct Device {
    config: TargetConfig,
}

impl Device {
    /// Load the device mobfile for `name`
    pub fn load(mobfiles: &Mobfiles, name: &str) -> Result<Self, ConfigError> {
        let config = TargetConfig::load(mobfiles, name, ConfigKind::Device, BTreeMap::new())?;
        Ok(Self { config })
    }

    /// Device name
    pub fn name(&self) -> &str {
        self.config.name()
    }

    /// Target architecture metadata, empty when undeclared
    pub fn architecture(&self) -> &str {
        self.config.get("Main.Architecture")
    }

    /// Shell command that connects the device, empty when undeclared
    pub fn connect_command(&self) -> &str {
        self.config.get("Main.ConnectCommand")
    }

    /// Shell command that disconnects the device, empty when undeclared
    pub fn disconnect_command(&self) -> &str {
        self.config.get("Main.DisconnectCommand")
    }

    /// The device's values namespaced under `device.*`, used as seed
    /// defaults for every target loaded against this device.
    pub fn seed_values(&self) -> BTreeMap<String, String> {
        self.config.namespaced("device")
    }

    #[cfg(test)]
    pub(crate) fn from_values(name: &str, values: BTreeMap<String, String>) -> Self {
        Self {
            config: TargetConfig::from_values(name, ConfigKind::Device, values),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_device_accessors() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(
            dir.path().join("pi.mobdevice"),
            "[Main]\nArchitecture = armv7\nConnectCommand = ssh pi\nDisconnectCommand = exit\n",
        )
        .expect("Failed to write mobfile");
        let mobfiles = Mobfiles::from_roots(vec![dir.path().to_path_buf()]);

        let device = Device::load(&mobfiles, "pi").expect("load");
        assert_eq!(device.name(), "pi");
        assert_eq!(device.architecture(), "armv7");
        assert_eq!(device.connect_command(), "ssh pi");
        assert_eq!(device.disconnect_command(), "exit");
    }

    #[test]
    fn test_absent_commands_are_empty_not_errors() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(dir.path().join("bare.mobdevice"), "[Main]\n").expect("Failed to write mobfile");
        let mobfiles = Mobfiles::from_roots(vec![dir.path().to_path_buf()]);

        let device = Device::load(&mobfiles, "bare").expect("load");
        assert_eq!(device.architecture(), "");
        assert_eq!(device.connect_command(), "");
        assert_eq!(device.disconnect_command(), "");
    }

    #[test]
    fn test_seed_values_carry_device_namespace() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(
            dir.path().join("pi.mobdevice"),
            "[Main]\nArchitecture = armv7\n",
        )
        .expect("Failed to write mobfile");
        let mobfiles = Mobfiles::from_roots(vec![dir.path().to_path_buf()]);

        let device = Device::load(&mobfiles, "pi").expect("load");
        let seeds = device.seed_values();
        assert_eq!(
            seeds.get("device.Main.Architecture").map(String::as_str),
            Some("armv7")
        );
    }
}
