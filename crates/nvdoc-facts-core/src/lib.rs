//! Core data types for nvdoc type facts.
//!
//! This crate defines the vocabulary shared by the workspace:
//! - `nvdoc-php` builds these records from parsed sources
//! - `nvdoc` resolves class names against a [`TypeCatalog`] and collects
//!   [`TypeDescriptor`]s for documentation

mod catalog;
mod descriptor;
mod member;

pub use catalog::{CatalogError, TypeCatalog};
pub use descriptor::{TypeDescriptor, TypeKind};
pub use member::{ConstantInfo, MethodInfo, ParameterInfo, PropertyInfo, Visibility};

/// Namespace separator used in fully-qualified PHP names.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Normalize a fully-qualified name for lookups.
///
/// Strips a leading `\` and lowercases, since PHP class names are
/// case-insensitive.
pub fn lookup_key(name: &str) -> String {
    name.trim_start_matches(NAMESPACE_SEPARATOR).to_ascii_lowercase()
}

/// Split a fully-qualified name into `(namespace, short_name)`.
///
/// `Foo\Bar\Baz` → `("Foo\Bar", "Baz")`, `Baz` → `("", "Baz")`.
pub fn split_namespace(name: &str) -> (&str, &str) {
    let name = name.trim_start_matches(NAMESPACE_SEPARATOR);
    match name.rfind(NAMESPACE_SEPARATOR) {
        Some(idx) => (&name[..idx], &name[idx + 1..]),
        None => ("", name),
    }
}
