//! Composer manifest parsing for nvdoc.
//!
//! Answers two questions about a PHP project on disk:
//! - which PSR-4 namespace prefixes map to which source directories
//!   ([`load_namespace_map`], [`NamespaceSource`])
//! - which version the root package reports ([`get_version`])
//!
//! Both are fail-soft: an unreadable or malformed `composer.json` yields an
//! empty map or the placeholder version, never an error.

mod composer;
mod namespaces;
mod version;

pub use composer::{
    COMPOSER_MANIFEST, ComposerManifest, NamespaceSource, load_namespace_map, parse_namespace_map,
};
pub use namespaces::{NamespaceEntry, NamespaceMap};
pub use version::{DEFAULT_VERSION, PackageMetadata, get_version};
