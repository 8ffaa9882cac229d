//! Mobfile configuration store
//!
//! Loads a named configuration unit (device, project, or install) from its
//! backing mobfile, layering caller-supplied seed defaults under the on-disk
//! content. Lookups never fail: an absent key reads as the empty string.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use configparser::ini::Ini;

use crate::error::ConfigError;
use crate::infra::discovery::Mobfiles;

/// The three flavors of configuration unit, each with its own mobfile
/// extension (`<name>.mobdevice`, `<name>.mobproject`, `<name>.mobinstall`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKind {
    /// Deployment device
    Device,
    /// Buildable project target
    Project,
    /// Installable target
    Install,
}

impl ConfigKind {
    /// File extension for mobfiles of this kind
    pub fn extension(self) -> &'static str {
        match self {
            Self::Device => "mobdevice",
            Self::Project => "mobproject",
            Self::Install => "mobinstall",
        }
    }
}

impl fmt::Display for ConfigKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Device => write!(f, "device"),
            Self::Project => write!(f, "project"),
            Self::Install => write!(f, "install"),
        }
    }
}

/// A loaded configuration unit.
///
/// Values are flattened to dotted `Section.Option` keys with the on-disk
/// case preserved. Seed defaults fill in keys the mobfile does not declare;
/// for a key present in both, the on-disk value wins.
///
/// Stores are never cached: each instantiation of a target re-reads and
/// re-merges its mobfile, so differing seeds per path produce genuinely
/// different merged configurations.
#[derive(Debug, Clone)]
pub struct TargetConfig {
    name: String,
    kind: ConfigKind,
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl TargetConfig {
    /// Load the mobfile for `(name, kind)` through the discovery search
    /// roots, merging `seeds` underneath the on-disk content.
    ///
    /// Fails if the backing file is missing or is not parseable INI; both
    /// report the offending path.
    pub fn load(
        mobfiles: &Mobfiles,
        name: &str,
        kind: ConfigKind,
        seeds: BTreeMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let path = mobfiles.locate(name, kind);
        if !path.exists() {
            return Err(ConfigError::NotFound { path });
        }
        Self::parse_file(name, kind, path, seeds)
    }

    fn parse_file(
        name: &str,
        kind: ConfigKind,
        path: PathBuf,
        seeds: BTreeMap<String, String>,
    ) -> Result<Self, ConfigError> {
        // Case-sensitive parser: section and option case is preserved as
        // written by the operator.
        let mut ini = Ini::new_cs();
        let sections = ini.load(&path).map_err(|error| ConfigError::Parse {
            path: path.clone(),
            error,
        })?;

        let mut values = seeds;
        let mut has_main = false;
        for (section, options) in &sections {
            if section == "Main" {
                has_main = true;
            }
            for (option, value) in options {
                values.insert(
                    format!("{section}.{option}"),
                    value.clone().unwrap_or_default(),
                );
            }
        }

        // The instantiation name always wins over an operator-declared one.
        if has_main {
            values.insert("Main.Name".to_string(), name.to_string());
        }

        Ok(Self {
            name: name.to_string(),
            kind,
            path,
            values,
        })
    }

    /// Name this unit was instantiated under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Kind of this unit
    pub fn kind(&self) -> ConfigKind {
        self.kind
    }

    /// Backing mobfile path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up a dotted `Section.Option` key.
    ///
    /// Returns the empty string when the key (or its whole section) is
    /// absent; callers cannot distinguish "absent" from "empty" here.
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map_or("", String::as_str)
    }

    /// All values with `prefix.` prepended to every key, for seeding this
    /// unit's configuration into another (e.g. `device.Main.Architecture`).
    pub fn namespaced(&self, prefix: &str) -> BTreeMap<String, String> {
        self.values
            .iter()
            .map(|(key, value)| (format!("{prefix}.{key}"), value.clone()))
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn from_values(
        name: &str,
        kind: ConfigKind,
        values: BTreeMap<String, String>,
    ) -> Self {
        Self {
            name: name.to_string(),
            kind,
            path: PathBuf::from(format!("{name}.{}", kind.extension())),
            values,
        }
    }
}
