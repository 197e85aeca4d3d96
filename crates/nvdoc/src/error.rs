//! Errors surfaced by nvdoc scans.
//!
//! Only conditions that indicate a caller mistake are errors. Manifest
//! problems, unparsable sources and types that cannot be described degrade
//! to less data instead.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error(transparent)]
    Parser(#[from] nvdoc_php::ParseError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
