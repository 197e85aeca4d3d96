//! Class resolution: file paths × namespace prefixes → class names.

use crate::Result;
use crate::scan::{FileScan, ScanOptions};
use nvdoc_facts_core::{NAMESPACE_SEPARATOR, TypeCatalog, lookup_key};
use nvdoc_manifest::{NamespaceMap, NamespaceSource};
use std::collections::HashSet;
use std::path::{Component, Path};

/// Synthesize a fully-qualified class name from a namespace prefix and a
/// path relative to the scanned directory.
///
/// `("App\\", "Models/User.php")` → `App\Models\User`. The file extension is
/// stripped and every path component becomes a namespace segment.
pub fn candidate_name(prefix: &str, relative: &Path) -> String {
    let stripped = relative.with_extension("");
    let segments: Vec<String> = stripped
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    let separator = NAMESPACE_SEPARATOR.to_string();
    format!(
        "{}{}{}",
        NamespaceMap::normalize_prefix(prefix),
        separator,
        segments.join(&separator)
    )
}

/// Find the classes declared by files under `search_dir`.
///
/// Every file is combined with every namespace prefix (manifest order) and a
/// candidate is kept when `catalog` knows a type of that name. Results
/// follow file order with prefix order nested inside; each class name
/// appears once, at its first match. Files that resolve to nothing are
/// skipped silently.
///
/// If the directory holds no matching files the namespace source is never
/// consulted. A missing `search_dir` is an error.
pub fn find_files(
    search_dir: &Path,
    namespaces: &dyn NamespaceSource,
    catalog: &dyn TypeCatalog,
    options: &ScanOptions,
) -> Result<Vec<String>> {
    let mut files = FileScan::new(search_dir, options)?.files().peekable();
    if files.peek().is_none() {
        tracing::debug!(dir = %search_dir.display(), "no files to resolve");
        return Ok(Vec::new());
    }

    let namespaces = namespaces.load_namespaces();
    if namespaces.is_empty() {
        tracing::debug!("no namespace prefixes declared");
    }

    let mut resolved = Vec::new();
    let mut seen = HashSet::new();
    for file in files {
        for prefix in namespaces.prefixes() {
            let candidate = candidate_name(prefix, &file.relative);
            if !catalog.has_type(&candidate) {
                tracing::trace!(file = %file.path.display(), %candidate, "no such type");
                continue;
            }
            if seen.insert(lookup_key(&candidate)) {
                resolved.push(candidate);
            } else {
                tracing::debug!(%candidate, "already resolved, keeping first match");
            }
        }
    }
    Ok(resolved)
}
