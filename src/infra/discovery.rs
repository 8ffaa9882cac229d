//! Mobfile discovery
//!
//! Locates the configuration units available to one invocation. Units live
//! in one or more search roots as `<name>.mobdevice`, `<name>.mobproject`,
//! and `<name>.mobinstall` files; the default root `./mobfiles` can be
//! extended with the colon-separated `MOBFILES` environment variable.
//! The same roots that feed discovery also resolve backing paths for
//! loading, first match wins.

use std::env;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::core::config::ConfigKind;

/// Environment variable holding extra colon-separated search roots
pub const ENV_SEARCH_PATH: &str = "MOBFILES";

/// Default search root, relative to the working directory
const DEFAULT_ROOT: &str = "./mobfiles";

/// The mobfiles visible through the configured search roots
#[derive(Debug, Clone)]
pub struct Mobfiles {
    roots: Vec<PathBuf>,
    devices: Vec<String>,
    projects: Vec<String>,
    installs: Vec<String>,
}

impl Mobfiles {
    /// Scan the default root plus any `MOBFILES` roots
    pub fn discover() -> Self {
        let mut roots = vec![PathBuf::from(DEFAULT_ROOT)];
        if let Ok(extra) = env::var(ENV_SEARCH_PATH) {
            roots.extend(extra.split(':').filter(|p| !p.is_empty()).map(PathBuf::from));
        }
        Self::from_roots(roots)
    }

    /// Scan an explicit list of search roots
    pub fn from_roots(roots: Vec<PathBuf>) -> Self {
        let mut mobfiles = Self {
            roots,
            devices: Vec::new(),
            projects: Vec::new(),
            installs: Vec::new(),
        };
        for root in mobfiles.roots.clone() {
            mobfiles.scan_root(&root);
        }
        tracing::debug!(
            "Discovered {} devices, {} projects, {} installs",
            mobfiles.devices.len(),
            mobfiles.projects.len(),
            mobfiles.installs.len()
        );
        mobfiles
    }

    fn scan_root(&mut self, root: &Path) {
        for entry in WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(Result::ok)
        {
            let path = entry.path();
            let (Some(stem), Some(extension)) = (
                path.file_stem().and_then(|s| s.to_str()),
                path.extension().and_then(|e| e.to_str()),
            ) else {
                continue;
            };
            let bucket = match extension {
                e if e == ConfigKind::Device.extension() => &mut self.devices,
                e if e == ConfigKind::Project.extension() => &mut self.projects,
                e if e == ConfigKind::Install.extension() => &mut self.installs,
                _ => continue,
            };
            if !bucket.iter().any(|n| n == stem) {
                bucket.push(stem.to_string());
            }
        }
    }

    /// Discovered device names, in root order
    pub fn devices(&self) -> &[String] {
        &self.devices
    }

    /// Discovered project names, in root order
    pub fn projects(&self) -> &[String] {
        &self.projects
    }

    /// Discovered install names, in root order
    pub fn installs(&self) -> &[String] {
        &self.installs
    }

    /// Whether `name` was discovered as a device
    pub fn is_device(&self, name: &str) -> bool {
        self.devices.iter().any(|n| n == name)
    }

    /// Whether `name` was discovered as a project
    pub fn is_project(&self, name: &str) -> bool {
        self.projects.iter().any(|n| n == name)
    }

    /// Whether `name` was discovered as an install
    pub fn is_install(&self, name: &str) -> bool {
        self.installs.iter().any(|n| n == name)
    }

    /// Backing path for `(name, kind)`: the first root holding a matching
    /// mobfile, or the candidate path in the first root when none does (the
    /// loader then reports that path as missing).
    pub fn locate(&self, name: &str, kind: ConfigKind) -> PathBuf {
        let file = format!("{name}.{}", kind.extension());
        self.roots
            .iter()
            .map(|root| root.join(&file))
            .find(|candidate| candidate.exists())
            .unwrap_or_else(|| {
                self.roots
                    .first()
                    .map_or_else(|| PathBuf::from(&file), |root| root.join(&file))
            })
    }
}
