//! One-shot directory scans.
//!
//! A [`FileScan`] is built from explicit [`ScanOptions`] for a single call
//! and consumed by [`FileScan::files`]; nothing carries over between scans.

use crate::{Error, Result};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Parameters of a directory scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// File extensions to keep (without the dot). Empty keeps every file.
    pub extensions: Vec<String>,
    /// Include dotfiles and dot-directories.
    pub hidden: bool,
    /// Honour `.gitignore`, global git excludes and `.git/info/exclude`.
    pub gitignore: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extensions: nvdoc_php::PHP_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
            hidden: false,
            gitignore: false,
        }
    }
}

impl ScanOptions {
    /// Scan every regular file regardless of extension.
    pub fn all_files() -> Self {
        Self {
            extensions: Vec::new(),
            ..Self::default()
        }
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.into().trim_start_matches('.').to_string())
            .collect();
        self
    }

    fn accepts(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }
}

/// A regular file found by a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    pub path: PathBuf,
    /// Path relative to the scanned directory
    pub relative: PathBuf,
}

/// A single directory scan.
#[derive(Debug)]
pub struct FileScan {
    dir: PathBuf,
    options: ScanOptions,
}

impl FileScan {
    /// Prepare a scan of `dir`. Fails if `dir` is not an existing directory.
    pub fn new(dir: &Path, options: &ScanOptions) -> Result<Self> {
        if !dir.is_dir() {
            return Err(Error::DirectoryNotFound(dir.to_path_buf()));
        }
        Ok(Self {
            dir: dir.to_path_buf(),
            options: options.clone(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Lazily enumerate regular files, recursively, sorted by name within
    /// each directory.
    pub fn files(self) -> impl Iterator<Item = ScannedFile> {
        let walker = WalkBuilder::new(&self.dir)
            .hidden(!self.options.hidden)
            .git_ignore(self.options.gitignore)
            .git_global(self.options.gitignore)
            .git_exclude(self.options.gitignore)
            .ignore(false)
            .parents(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let Self { dir, options } = self;
        walker.filter_map(move |entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::debug!(error = %e, "skipping unreadable entry");
                    return None;
                }
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                return None;
            }
            let path = entry.into_path();
            if !options.accepts(&path) {
                return None;
            }
            let relative = path.strip_prefix(&dir).ok()?.to_path_buf();
            Some(ScannedFile { path, relative })
        })
    }
}
