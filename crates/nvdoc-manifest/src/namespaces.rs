//! Namespace prefix → source directory mapping.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// One PSR-4 declaration: a namespace prefix and its source directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceEntry {
    /// Prefix without the trailing `\` (e.g. `App\Models`)
    pub prefix: String,
    /// Directories relative to the project root, in manifest order
    pub directories: Vec<String>,
}

/// Ordered mapping from namespace prefix to source directories.
///
/// Keys are never empty. Inserting an existing prefix replaces its
/// directories but keeps its original position (last write wins), which
/// matches a plain JSON object with a duplicated key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceMap {
    entries: Vec<NamespaceEntry>,
}

impl NamespaceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strip trailing namespace separators from a prefix.
    pub fn normalize_prefix(prefix: &str) -> &str {
        prefix.trim().trim_end_matches('\\')
    }

    /// Insert a prefix. Returns `false` when the prefix normalizes to empty
    /// and was therefore ignored.
    pub fn insert<I, S>(&mut self, prefix: &str, directories: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prefix = Self::normalize_prefix(prefix);
        if prefix.is_empty() {
            return false;
        }
        let directories: Vec<String> = directories.into_iter().map(Into::into).collect();
        match self.entries.iter_mut().find(|e| e.prefix == prefix) {
            Some(existing) => existing.directories = directories,
            None => self.entries.push(NamespaceEntry {
                prefix: prefix.to_string(),
                directories,
            }),
        }
        true
    }

    pub fn get(&self, prefix: &str) -> Option<&[String]> {
        let prefix = Self::normalize_prefix(prefix);
        self.entries
            .iter()
            .find(|e| e.prefix == prefix)
            .map(|e| e.directories.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamespaceEntry> {
        self.entries.iter()
    }

    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.prefix.as_str())
    }
}

impl<'a> IntoIterator for &'a NamespaceMap {
    type Item = &'a NamespaceEntry;
    type IntoIter = std::slice::Iter<'a, NamespaceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for NamespaceMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.prefix, &entry.directories)?;
        }
        map.end()
    }
}
