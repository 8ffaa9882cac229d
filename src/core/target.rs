//! Target model and dependency expansion
//!
//! A target is a named unit of work backed by a mobfile. Project targets
//! declare dependencies on other projects (`Depends`) and on install targets
//! (`Installs`); expansion materializes that declaration into a tree of
//! fresh nodes, re-reading configuration at every occurrence. Cycle
//! detection happens during expansion, against the direct ancestry path of
//! the branch being built.

use std::collections::BTreeMap;

use crate::core::config::{ConfigKind, TargetConfig};
use crate::core::device::Device;
use crate::core::options::TargetArgs;
use crate::error::{MobError, ResolveError};
use crate::infra::discovery::Mobfiles;

/// A node in the dependency tree
#[derive(Debug)]
pub enum TargetNode {
    /// Buildable project target
    Project(ProjectTarget),
    /// Installable target, always terminal
    Install(InstallTarget),
}

impl TargetNode {
    /// Target name
    pub fn name(&self) -> &str {
        match self {
            Self::Project(target) => target.name(),
            Self::Install(target) => target.name(),
        }
    }

    /// Child targets in discovery order (`Depends` before `Installs`);
    /// always empty for install targets
    pub fn dependencies(&self) -> &[TargetNode] {
        match self {
            Self::Project(target) => target.dependencies(),
            Self::Install(_) => &[],
        }
    }
}

/// A buildable target backed by a `<name>.mobproject` unit
#[derive(Debug)]
pub struct ProjectTarget {
    config: TargetConfig,
    dependencies: Vec<TargetNode>,
}

impl ProjectTarget {
    /// Load `name` and recursively expand its dependency tree.
    ///
    /// `ancestry` is the ordered list of ancestor project names on this
    /// branch only; each recursion extends a copy, so sibling branches
    /// never see each other's lineage. A `Depends` entry matching the
    /// current target or any ancestor is a fatal circular dependency.
    ///
    /// Dependencies whose own configuration fails to load are dropped from
    /// the tree; only a load failure of the target itself propagates.
    pub fn expand(
        mobfiles: &Mobfiles,
        name: &str,
        args: &TargetArgs,
        device: &Device,
        ancestry: &[String],
    ) -> Result<Self, MobError> {
        let config = TargetConfig::load(
            mobfiles,
            name,
            ConfigKind::Project,
            seed_with_device(args, device),
        )?;

        let mut dependencies = Vec::new();

        for dependency in config.get("Main.Depends").split_whitespace() {
            if dependency == name || ancestry.iter().any(|a| a == dependency) {
                return Err(ResolveError::CircularDependency {
                    target: name.to_string(),
                    dependency: dependency.to_string(),
                }
                .into());
            }
            let mut branch = ancestry.to_vec();
            branch.push(name.to_string());
            match Self::expand(mobfiles, dependency, args, device, &branch) {
                Ok(target) => dependencies.push(TargetNode::Project(target)),
                Err(MobError::Config(error)) => {
                    tracing::debug!("Dropping dependency `{dependency}` of `{name}`: {error}");
                }
                Err(error) => return Err(error),
            }
        }

        for install in config.get("Main.Installs").split_whitespace() {
            match InstallTarget::load(mobfiles, install, args, device) {
                Ok(target) => dependencies.push(TargetNode::Install(target)),
                Err(error) => {
                    tracing::debug!("Dropping install `{install}` of `{name}`: {error}");
                }
            }
        }

        Ok(Self {
            config,
            dependencies,
        })
    }

    /// Target name
    pub fn name(&self) -> &str {
        self.config.name()
    }

    /// Child targets in discovery order
    pub fn dependencies(&self) -> &[TargetNode] {
        &self.dependencies
    }

    /// Shell command for the configure step, empty when undeclared
    pub fn configure_command(&self) -> &str {
        self.config.get("Main.ConfigureCommand")
    }

    /// Shell command for the build step, empty when undeclared
    pub fn build_command(&self) -> &str {
        self.config.get("Main.BuildCommand")
    }

    /// Shell command for the clean step, empty when undeclared
    pub fn clean_command(&self) -> &str {
        self.config.get("Main.CleanCommand")
    }

    #[cfg(test)]
    pub(crate) fn from_parts(config: TargetConfig, dependencies: Vec<TargetNode>) -> Self {
        Self {
            config,
            dependencies,
        }
    }
}

/// An installable target backed by a `<name>.mobinstall` unit; terminal,
/// it never expands further dependencies
#[derive(Debug)]
pub struct InstallTarget {
    config: TargetConfig,
}

impl InstallTarget {
    /// Load the install mobfile for `name`
    pub fn load(
        mobfiles: &Mobfiles,
        name: &str,
        args: &TargetArgs,
        device: &Device,
    ) -> Result<Self, MobError> {
        let config = TargetConfig::load(
            mobfiles,
            name,
            ConfigKind::Install,
            seed_with_device(args, device),
        )?;
        Ok(Self { config })
    }

    /// Target name
    pub fn name(&self) -> &str {
        self.config.name()
    }

    /// Shell command for the install step, empty when undeclared
    pub fn install_command(&self) -> &str {
        self.config.get("Main.InstallCommand")
    }

    #[cfg(test)]
    pub(crate) fn from_config(config: TargetConfig) -> Self {
        Self { config }
    }
}

/// Seed defaults for a target load: caller arguments plus the device's
/// configuration under the `device.*` namespace.
fn seed_with_device(args: &TargetArgs, device: &Device) -> BTreeMap<String, String> {
    let mut seeds = args.clone();
    seeds.extend(device.seed_values());
    seeds
}

/// Expand each requested top-level name into a target node.
///
/// Names are assumed validated against discovery by the CLI layer; a name
/// known as a project expands recursively, anything else loads as an
/// install target. A load failure here is fatal, unlike for transitively
/// discovered dependencies.
pub fn expand_requested(
    mobfiles: &Mobfiles,
    names: &[String],
    args: &TargetArgs,
    device: &Device,
) -> Result<Vec<TargetNode>, MobError> {
    let mut roots = Vec::with_capacity(names.len());
    for name in names {
        let node = if mobfiles.is_project(name) {
            TargetNode::Project(ProjectTarget::expand(mobfiles, name, args, device, &[])?)
        } else {
            TargetNode::Install(InstallTarget::load(mobfiles, name, args, device)?)
        };
        roots.push(node);
    }
    Ok(roots)
}
