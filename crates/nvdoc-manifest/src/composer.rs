//! Composer (PHP) manifest: PSR-4 autoload declarations.

use crate::NamespaceMap;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Default manifest file name at the project root.
pub const COMPOSER_MANIFEST: &str = "composer.json";

/// Something that can produce the project's namespace map.
///
/// The class resolver depends on this seam rather than on the manifest file
/// directly, so the manifest is read only when a scan actually needs it.
pub trait NamespaceSource {
    fn load_namespaces(&self) -> NamespaceMap;
}

impl NamespaceSource for NamespaceMap {
    fn load_namespaces(&self) -> NamespaceMap {
        self.clone()
    }
}

impl<F: Fn() -> NamespaceMap> NamespaceSource for F {
    fn load_namespaces(&self) -> NamespaceMap {
        self()
    }
}

/// A `composer.json` located under a project root.
#[derive(Debug, Clone)]
pub struct ComposerManifest {
    root: PathBuf,
    file_name: String,
    include_dev: bool,
}

impl ComposerManifest {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            file_name: COMPOSER_MANIFEST.to_string(),
            include_dev: false,
        }
    }

    /// Use a manifest file name other than `composer.json`.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Also read `autoload-dev.psr-4`, appended after `autoload.psr-4`.
    pub fn with_dev(mut self, include_dev: bool) -> Self {
        self.include_dev = include_dev;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self) -> PathBuf {
        self.root.join(&self.file_name)
    }
}

impl NamespaceSource for ComposerManifest {
    fn load_namespaces(&self) -> NamespaceMap {
        let path = self.path();
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "manifest unreadable");
                return NamespaceMap::new();
            }
        };
        parse_psr4(&content, self.include_dev)
    }
}

/// Read the PSR-4 namespace map from `<root>/composer.json`.
///
/// A missing file, malformed JSON, and an absent `autoload.psr-4` field all
/// yield an empty map.
pub fn load_namespace_map(root: &Path) -> NamespaceMap {
    ComposerManifest::new(root).load_namespaces()
}

/// Extract the PSR-4 namespace map from manifest text.
pub fn parse_namespace_map(content: &str) -> NamespaceMap {
    parse_psr4(content, false)
}

fn parse_psr4(content: &str, include_dev: bool) -> NamespaceMap {
    let parsed: Value = match serde_json::from_str(content) {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!(error = %e, "manifest is not valid JSON");
            return NamespaceMap::new();
        }
    };

    let mut map = NamespaceMap::new();
    let sections: &[&str] = if include_dev {
        &["autoload", "autoload-dev"]
    } else {
        &["autoload"]
    };

    for section in sections {
        let Some(psr4) = parsed
            .get(*section)
            .and_then(|a| a.get("psr-4"))
            .and_then(|p| p.as_object())
        else {
            tracing::debug!(section, "no psr-4 declarations");
            continue;
        };

        for (prefix, dirs) in psr4 {
            let directories: Vec<String> = match dirs {
                Value::String(dir) => vec![dir.clone()],
                Value::Array(items) => items
                    .iter()
                    .filter_map(|d| d.as_str().map(String::from))
                    .collect(),
                _ => continue,
            };
            if !map.insert(prefix, directories) {
                tracing::debug!(prefix = %prefix, "skipping empty namespace prefix");
            }
        }
    }

    map
}
