//! Package version lookup.

use crate::COMPOSER_MANIFEST;
use std::path::Path;

/// Version reported when no package metadata is available.
pub const DEFAULT_VERSION: &str = "0.0.1";

/// Package metadata captured once and passed to [`get_version`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageMetadata {
    pub name: Option<String>,
    pub version: Option<String>,
}

impl PackageMetadata {
    /// Metadata baked in at build time (`NVDOC_PACKAGE_VERSION`).
    pub fn from_build() -> Self {
        Self {
            name: Some(env!("CARGO_PKG_NAME").to_string()),
            version: option_env!("NVDOC_PACKAGE_VERSION")
                .filter(|v| !v.is_empty())
                .map(String::from),
        }
    }

    /// Metadata of the root package declared in `<root>/composer.json`.
    pub fn from_manifest(root: &Path) -> Self {
        let path = root.join(COMPOSER_MANIFEST);
        let Ok(content) = std::fs::read_to_string(&path) else {
            tracing::debug!(path = %path.display(), "no root package metadata");
            return Self::default();
        };
        let Ok(parsed) = serde_json::from_str::<serde_json::Value>(&content) else {
            return Self::default();
        };
        let field = |key: &str| {
            parsed
                .get(key)
                .and_then(|v| v.as_str())
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(String::from)
        };
        Self {
            name: field("name"),
            version: field("version"),
        }
    }
}

/// The reported package version, or [`DEFAULT_VERSION`] when unknown.
pub fn get_version(metadata: &PackageMetadata) -> String {
    metadata
        .version
        .clone()
        .unwrap_or_else(|| DEFAULT_VERSION.to_string())
}
