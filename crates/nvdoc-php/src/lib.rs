//! Static PHP declaration extraction for nvdoc.
//!
//! Parses PHP sources with tree-sitter and builds a [`PhpCatalog`]: a
//! name → declaration table answering the [`TypeCatalog`] queries that
//! class resolution and metadata collection need, without loading any PHP.
//!
//! [`TypeCatalog`]: nvdoc_facts_core::TypeCatalog

mod catalog;
mod extract;
mod names;
mod parser;

pub use catalog::PhpCatalog;
pub use names::{NameResolver, parse_use_declaration};
pub use parser::{ParseError, PhpParser};

use nvdoc_facts_core::TypeDescriptor;
use std::path::Path;

/// File extensions treated as PHP sources.
pub const PHP_EXTENSIONS: &[&str] = &["php"];

/// Parse PHP source text and return its class-like declarations (own
/// members only, no inheritance merging).
pub fn parse_php(content: &str, path: Option<&Path>) -> Result<Vec<TypeDescriptor>, ParseError> {
    let mut parser = PhpParser::new()?;
    let Some(tree) = parser.parse(content) else {
        return Ok(Vec::new());
    };
    Ok(extract::extract_declarations(&tree.root_node(), content, path))
}
