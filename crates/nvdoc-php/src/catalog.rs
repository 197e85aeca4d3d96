//! A type catalog built by statically parsing PHP sources.

use crate::extract::extract_declarations;
use crate::parser::{ParseError, PhpParser};
use nvdoc_facts_core::{
    CatalogError, TypeCatalog, TypeDescriptor, TypeKind, Visibility, lookup_key,
};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Name → declaration table for PHP class-like types.
///
/// Lookups are case-insensitive and ignore a leading `\`, matching PHP's
/// class name semantics. When the same type is declared twice the first
/// declaration is kept.
pub struct PhpCatalog {
    parser: PhpParser,
    types: HashMap<String, TypeDescriptor>,
    /// Lookup keys in insertion order
    order: Vec<String>,
}

impl PhpCatalog {
    pub fn new() -> Result<Self, ParseError> {
        Ok(Self {
            parser: PhpParser::new()?,
            types: HashMap::new(),
            order: Vec::new(),
        })
    }

    /// Build a catalog from source files. Unreadable files are skipped.
    pub fn from_files<I, P>(paths: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut catalog = Self::new()?;
        for path in paths {
            catalog.add_file(path.as_ref());
        }
        Ok(catalog)
    }

    /// Parse a file and add its declarations. Returns how many were added.
    pub fn add_file(&mut self, path: &Path) -> usize {
        match std::fs::read_to_string(path) {
            Ok(content) => self.add_source(Some(path), &content),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "skipping unreadable source");
                0
            }
        }
    }

    /// Parse source text and add its declarations. Returns how many were added.
    pub fn add_source(&mut self, path: Option<&Path>, content: &str) -> usize {
        let Some(tree) = self.parser.parse(content) else {
            tracing::debug!(path = ?path, "parser produced no tree");
            return 0;
        };
        let root = tree.root_node();
        if root.has_error() {
            tracing::debug!(path = ?path, "source has syntax errors, extracting what parses");
        }

        let mut added = 0;
        for desc in extract_declarations(&root, content, path) {
            if self.insert(desc) {
                added += 1;
            }
        }
        added
    }

    /// Add a declaration. Returns `false` if the name was already declared.
    pub fn insert(&mut self, desc: TypeDescriptor) -> bool {
        let key = lookup_key(&desc.name);
        if self.types.contains_key(&key) {
            tracing::debug!(name = %desc.name, "duplicate declaration ignored");
            return false;
        }
        self.order.push(key.clone());
        self.types.insert(key, desc);
        true
    }

    /// The declaration as written, without inherited members.
    pub fn declaration(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.get(&lookup_key(name))
    }

    /// Canonical names of every declared type, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order
            .iter()
            .filter_map(|k| self.types.get(k))
            .map(|d| d.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Pull in members of used traits (and traits those traits use).
    ///
    /// Trait members are reported as declared by the using type.
    fn merge_traits(&self, desc: &mut TypeDescriptor, traits: &[String], seen: &mut HashSet<String>) {
        for trait_name in traits {
            if !seen.insert(lookup_key(trait_name)) {
                continue;
            }
            let Some(decl) = self.declaration(trait_name) else {
                continue;
            };
            for method in &decl.methods {
                if desc.method(&method.name).is_none() {
                    let mut method = method.clone();
                    method.declaring_type = desc.name.clone();
                    desc.methods.push(method);
                }
            }
            for property in &decl.properties {
                if desc.property(&property.name).is_none() {
                    let mut property = property.clone();
                    property.declaring_type = desc.name.clone();
                    desc.properties.push(property);
                }
            }
            for constant in &decl.constants {
                if desc.constant(&constant.name).is_none() {
                    desc.constants.push(constant.clone());
                }
            }
            self.merge_traits(desc, &decl.traits, seen);
        }
    }

    /// Add interfaces inherited through `decl`'s interface list, transitively.
    fn merge_interfaces(&self, desc: &mut TypeDescriptor, seen: &mut HashSet<String>) {
        let mut pending: Vec<String> = desc.interfaces.clone();
        let mut index = 0;
        while index < pending.len() {
            let name = pending[index].clone();
            index += 1;
            if !seen.insert(lookup_key(&name)) {
                continue;
            }
            if !desc.interfaces.iter().any(|i| i.eq_ignore_ascii_case(&name)) {
                desc.interfaces.push(name.clone());
            }
            let Some(decl) = self.declaration(&name) else {
                continue;
            };
            for constant in &decl.constants {
                if desc.constant(&constant.name).is_none() {
                    desc.constants.push(constant.clone());
                }
            }
            // Abstract types and interfaces expose the interface's methods
            if desc.kind == TypeKind::Interface || desc.is_abstract {
                for method in &decl.methods {
                    if desc.method(&method.name).is_none() {
                        desc.methods.push(method.clone());
                    }
                }
            }
            pending.extend(decl.interfaces.iter().cloned());
        }
    }
}

impl TypeCatalog for PhpCatalog {
    fn has_type(&self, name: &str) -> bool {
        self.types.contains_key(&lookup_key(name))
    }

    /// Describe a type with inherited members merged in.
    ///
    /// Methods, properties and constants come from the type itself, then its
    /// traits, then the parent chain (private parent properties and
    /// constants are not inherited). Interfaces include every interface
    /// reachable through parents and interface inheritance. Types outside
    /// the catalog are named but not expanded.
    fn describe_type(&self, name: &str) -> Result<TypeDescriptor, CatalogError> {
        let decl = self
            .declaration(name)
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))?;
        let mut desc = decl.clone();

        let mut seen_traits = HashSet::new();
        self.merge_traits(&mut desc, &decl.traits, &mut seen_traits);

        let mut visited = HashSet::from([lookup_key(&decl.name)]);
        let mut parent = decl.parent.clone();
        while let Some(parent_name) = parent {
            if !visited.insert(lookup_key(&parent_name)) {
                tracing::debug!(name = %desc.name, parent = %parent_name, "inheritance cycle");
                break;
            }
            let Some(parent_decl) = self.declaration(&parent_name) else {
                break;
            };

            let mut inherited = parent_decl.clone();
            self.merge_traits(&mut inherited, &parent_decl.traits, &mut HashSet::new());

            for method in inherited.methods {
                if desc.method(&method.name).is_none() {
                    desc.methods.push(method);
                }
            }
            for property in inherited.properties {
                if property.visibility != Visibility::Private && desc.property(&property.name).is_none()
                {
                    desc.properties.push(property);
                }
            }
            for constant in inherited.constants {
                if constant.visibility != Visibility::Private && desc.constant(&constant.name).is_none()
                {
                    desc.constants.push(constant);
                }
            }
            for interface in inherited.interfaces {
                if !desc.interfaces.iter().any(|i| i.eq_ignore_ascii_case(&interface)) {
                    desc.interfaces.push(interface);
                }
            }
            parent = parent_decl.parent.clone();
        }

        self.merge_interfaces(&mut desc, &mut HashSet::new());
        Ok(desc)
    }
}
