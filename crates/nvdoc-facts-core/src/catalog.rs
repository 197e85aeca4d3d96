//! The type catalog capability.

use crate::TypeDescriptor;

/// Error returned when a catalog cannot describe a type.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("type not found: {0}")]
    NotFound(String),

    #[error("cannot describe {name}: {reason}")]
    Unsupported { name: String, reason: String },
}

/// A queryable table of known type declarations.
///
/// Stands in for a runtime reflection facility: resolution asks
/// [`has_type`](TypeCatalog::has_type) whether a synthesized name exists, and
/// metadata collection asks [`describe_type`](TypeCatalog::describe_type) for
/// its structure.
pub trait TypeCatalog {
    /// Whether a type with this fully-qualified name is known.
    fn has_type(&self, name: &str) -> bool;

    /// Structural metadata for a known type.
    fn describe_type(&self, name: &str) -> Result<TypeDescriptor, CatalogError>;
}

impl<T: TypeCatalog + ?Sized> TypeCatalog for &T {
    fn has_type(&self, name: &str) -> bool {
        (**self).has_type(name)
    }

    fn describe_type(&self, name: &str) -> Result<TypeDescriptor, CatalogError> {
        (**self).describe_type(name)
    }
}
