//! Type declaration records.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{ConstantInfo, MethodInfo, PropertyInfo};

/// Kind of a class-like declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Class,
    Interface,
    Trait,
    Enum,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Interface => "interface",
            TypeKind::Trait => "trait",
            TypeKind::Enum => "enum",
        }
    }
}

/// Structural metadata for a single class-like type.
///
/// Every facet is always present; a type with no traits has an empty
/// `traits` list rather than a missing field. Records are snapshots taken
/// when the sources were parsed and go stale if the sources change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Canonical fully-qualified name, as declared (no leading `\`)
    pub name: String,
    pub kind: TypeKind,
    /// Namespace part of `name` (empty for the global namespace)
    pub namespace: String,
    pub doc_comment: Option<String>,
    pub attributes: Vec<String>,
    pub is_abstract: bool,
    pub is_final: bool,
    pub is_readonly: bool,
    /// Fully-qualified parent class (`extends`) for classes
    pub parent: Option<String>,
    /// Fully-qualified interface names
    pub interfaces: Vec<String>,
    /// Fully-qualified names of traits used directly by this type
    pub traits: Vec<String>,
    pub methods: Vec<MethodInfo>,
    pub properties: Vec<PropertyInfo>,
    pub constants: Vec<ConstantInfo>,
    /// Source file the declaration was read from
    pub file: Option<PathBuf>,
}

impl TypeDescriptor {
    /// Create an empty descriptor for `name`.
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        let name: String = name.into();
        let name = name.trim_start_matches(crate::NAMESPACE_SEPARATOR).to_string();
        let namespace = crate::split_namespace(&name).0.to_string();
        Self {
            name,
            kind,
            namespace,
            doc_comment: None,
            attributes: Vec::new(),
            is_abstract: false,
            is_final: false,
            is_readonly: false,
            parent: None,
            interfaces: Vec::new(),
            traits: Vec::new(),
            methods: Vec::new(),
            properties: Vec::new(),
            constants: Vec::new(),
            file: None,
        }
    }

    /// Unqualified name (`Baz` for `Foo\Bar\Baz`).
    pub fn short_name(&self) -> &str {
        crate::split_namespace(&self.name).1
    }

    pub fn method(&self, name: &str) -> Option<&MethodInfo> {
        self.methods
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(name))
    }

    pub fn property(&self, name: &str) -> Option<&PropertyInfo> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn constant(&self, name: &str) -> Option<&ConstantInfo> {
        self.constants.iter().find(|c| c.name == name)
    }
}
