//! Configuration system for nvdoc.
//!
//! Loads config from:
//! 1. Global: ~/.config/nvdoc/config.toml
//! 2. Per-project: .nvdoc/config.toml (overrides global)
//!
//! Example config.toml:
//! ```toml
//! [manifest]
//! file = "composer.json"
//! include_dev = false
//!
//! [scan]
//! extensions = ["php"]
//! hidden = false
//! gitignore = false
//! ```

use crate::scan::ScanOptions;
use nvdoc_manifest::{COMPOSER_MANIFEST, ComposerManifest};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Manifest configuration.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ManifestConfig {
    /// Manifest file name relative to the project root.
    pub file: Option<String>,
    /// Also read `autoload-dev` namespaces.
    pub include_dev: Option<bool>,
}

/// Scan configuration.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ScanConfig {
    /// Source extensions to scan. An empty list scans every file.
    pub extensions: Option<Vec<String>>,
    pub hidden: Option<bool>,
    pub gitignore: Option<bool>,
}

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct NvdocConfig {
    pub manifest: ManifestConfig,
    pub scan: ScanConfig,
}

impl NvdocConfig {
    /// Load configuration for a project.
    ///
    /// Missing or malformed files are ignored.
    pub fn load(root: &Path) -> Self {
        Self::load_with_global(Self::global_config_path().as_deref(), root)
    }

    fn load_with_global(global_path: Option<&Path>, root: &Path) -> Self {
        let mut config = Self::default();

        if let Some(global) = global_path.and_then(Self::load_file) {
            config = config.merge(global);
        }

        let project_path = root.join(".nvdoc").join("config.toml");
        if let Some(project) = Self::load_file(&project_path) {
            config = config.merge(project);
        }

        config
    }

    /// Get the global config path.
    fn global_config_path() -> Option<PathBuf> {
        let config_home = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))?;
        Some(config_home.join("nvdoc").join("config.toml"))
    }

    fn load_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config");
                None
            }
        }
    }

    /// Merge another config into this one; values set in `other` win.
    fn merge(self, other: Self) -> Self {
        Self {
            manifest: ManifestConfig {
                file: other.manifest.file.or(self.manifest.file),
                include_dev: other.manifest.include_dev.or(self.manifest.include_dev),
            },
            scan: ScanConfig {
                extensions: other.scan.extensions.or(self.scan.extensions),
                hidden: other.scan.hidden.or(self.scan.hidden),
                gitignore: other.scan.gitignore.or(self.scan.gitignore),
            },
        }
    }

    pub fn manifest_file(&self) -> &str {
        self.manifest.file.as_deref().unwrap_or(COMPOSER_MANIFEST)
    }

    /// The manifest under `root` described by this config.
    pub fn manifest(&self, root: &Path) -> ComposerManifest {
        ComposerManifest::new(root)
            .with_file_name(self.manifest_file())
            .with_dev(self.manifest.include_dev.unwrap_or(false))
    }

    pub fn scan_options(&self) -> ScanOptions {
        let defaults = ScanOptions::default();
        let options = ScanOptions {
            hidden: self.scan.hidden.unwrap_or(defaults.hidden),
            gitignore: self.scan.gitignore.unwrap_or(defaults.gitignore),
            ..defaults
        };
        match &self.scan.extensions {
            Some(extensions) => options.with_extensions(extensions.iter().cloned()),
            None => options,
        }
    }
}
