//! Parser module for the kexpr format
//!
//! This module contains the parsing logic for the kexpr format. The grammar is small and
//! deterministic (one token of lookahead):
//!
//! ```text
//! Document       := Node*
//! Node           := KeyExpression | CompoundGroup
//! CompoundGroup  := '{' Node+ '}'
//! KeyExpression  := Identifier '-->' Property* ';'
//! Property       := Identifier '=' (Number | Identifier | String | '[' Value* ']')
//! Value          := Number | Identifier | String
//! ```
//!
//! Parsing either yields a complete [`Document`] or a [`SyntaxError`] pointing at the
//! offending token; there is no partial result.
//!
//! ## Testing
//!
//! See the [testing module](crate::kexpr::testing) for the fluent tree assertions used by
//! the parser tests.

pub mod api;
pub mod combinators;
pub mod document;
pub mod error;

pub use crate::kexpr::ast::{CompoundGroup, Document, KeyExpression, ListItem, Node, Property};
pub use api::{parse_tokens, KexprParser};
pub use document::document;
pub use error::SyntaxError;

/// Main parser function that takes source text and returns a parsed document
/// This is the primary entry point for parsing kexpr documents
pub fn parse_document(source: &str) -> Result<Document, SyntaxError> {
    KexprParser::new().parse(source)
}
