//! Discover PHP classes through PSR-4 namespaces and collect their structure.
//!
//! The pipeline runs in one direction:
//!
//! 1. `composer.json` → [`NamespaceMap`] (prefix → directories)
//! 2. every file under the search directory × every prefix → candidate names
//! 3. candidates known to the [`TypeCatalog`] → resolved classes
//! 4. resolved classes → [`TypeDescriptor`] records
//!
//! The catalog is built by statically parsing the scanned sources
//! ([`PhpCatalog`]), so no PHP runtime is involved.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let info = nvdoc::collect_metadata(Path::new("."), Path::new("src"))?;
//! for (class, desc) in &info {
//!     println!("{class}: {} methods", desc.methods.len());
//! }
//! # Ok::<(), nvdoc::Error>(())
//! ```

pub mod collect;
pub mod config;
mod error;
pub mod resolve;
pub mod scan;

pub use collect::{FilesInformation, Nvdoc, build_catalog, collect_metadata, describe_all};
pub use config::NvdocConfig;
pub use error::{Error, Result};
pub use resolve::{candidate_name, find_files};
pub use scan::{FileScan, ScanOptions, ScannedFile};

pub use nvdoc_facts_core::{
    CatalogError, ConstantInfo, MethodInfo, ParameterInfo, PropertyInfo, TypeCatalog,
    TypeDescriptor, TypeKind, Visibility,
};
pub use nvdoc_manifest::{
    ComposerManifest, DEFAULT_VERSION, NamespaceMap, NamespaceSource, PackageMetadata,
    get_version, load_namespace_map,
};
pub use nvdoc_php::PhpCatalog;
