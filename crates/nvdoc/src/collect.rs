//! Metadata collection: resolved classes → type descriptors.

use crate::config::NvdocConfig;
use crate::resolve::find_files;
use crate::scan::{FileScan, ScanOptions};
use crate::Result;
use nvdoc_facts_core::{TypeCatalog, TypeDescriptor};
use nvdoc_manifest::{ComposerManifest, NamespaceMap, NamespaceSource, PackageMetadata};
use nvdoc_php::PhpCatalog;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Class name → structural metadata.
pub type FilesInformation = BTreeMap<String, TypeDescriptor>;

/// Describe every resolved class.
///
/// Keys are the canonical names reported by the catalog. Classes the catalog
/// cannot describe are dropped; a later record for the same key replaces an
/// earlier one.
pub fn describe_all<S: AsRef<str>>(names: &[S], catalog: &dyn TypeCatalog) -> FilesInformation {
    let mut information = FilesInformation::new();
    for name in names {
        match catalog.describe_type(name.as_ref()) {
            Ok(desc) => {
                information.insert(desc.name.clone(), desc);
            }
            Err(e) => tracing::debug!(name = name.as_ref(), error = %e, "skipping class"),
        }
    }
    information
}

/// Build a catalog from the sources under `dir`.
pub fn build_catalog(dir: &Path, options: &ScanOptions) -> Result<PhpCatalog> {
    let files = FileScan::new(dir, options)?.files().map(|f| f.path);
    let catalog = PhpCatalog::from_files(files)?;
    tracing::debug!(dir = %dir.display(), types = catalog.len(), "built type catalog");
    Ok(catalog)
}

/// Class discovery for one PHP project.
///
/// Holds only the project root and its configuration; every scan builds its
/// own file walk, namespace map and catalog.
#[derive(Debug, Clone)]
pub struct Nvdoc {
    root: PathBuf,
    config: NvdocConfig,
}

impl Nvdoc {
    /// Open a project, loading its configuration.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let config = NvdocConfig::load(&root);
        Self { root, config }
    }

    pub fn with_config(root: impl Into<PathBuf>, config: NvdocConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &NvdocConfig {
        &self.config
    }

    pub fn manifest(&self) -> ComposerManifest {
        self.config.manifest(&self.root)
    }

    /// The project's PSR-4 namespace map (empty if the manifest is unusable).
    pub fn namespaces(&self) -> NamespaceMap {
        self.manifest().load_namespaces()
    }

    /// Version reported by the project's root package, or `0.0.1`.
    pub fn version(&self) -> String {
        nvdoc_manifest::get_version(&PackageMetadata::from_manifest(&self.root))
    }

    /// Fully-qualified names of the classes declared under `dir`.
    pub fn find_files(&self, dir: &Path) -> Result<Vec<String>> {
        let options = self.config.scan_options();
        let catalog = build_catalog(dir, &options)?;
        find_files(dir, &self.manifest(), &catalog, &options)
    }

    /// Structural metadata for every class declared under `dir`.
    pub fn files_information(&self, dir: &Path) -> Result<FilesInformation> {
        let options = self.config.scan_options();
        let catalog = build_catalog(dir, &options)?;
        let names = find_files(dir, &self.manifest(), &catalog, &options)?;
        Ok(describe_all(&names, &catalog))
    }
}

/// Collect metadata for the classes under `search_dir` of the project at `root`.
pub fn collect_metadata(root: &Path, search_dir: &Path) -> Result<FilesInformation> {
    Nvdoc::new(root).files_information(search_dir)
}
