//! Tree-sitter parser for PHP sources.

use tree_sitter::{Parser, Tree};

/// Error creating the PHP parser.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to load PHP grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
}

/// A tree-sitter parser configured with the PHP grammar.
///
/// One parser is created per catalog build and dropped with it.
pub struct PhpParser {
    parser: Parser,
}

impl PhpParser {
    pub fn new() -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_php::LANGUAGE_PHP.into())?;
        Ok(Self { parser })
    }

    /// Parse a full PHP file (including the leading `<?php` tag).
    ///
    /// Syntax errors do not fail the parse; the tree contains `ERROR` nodes
    /// and the well-formed declarations around them are still extracted.
    pub fn parse(&mut self, source: &str) -> Option<Tree> {
        self.parser.parse(source, None)
    }
}
