//! Public API for the parser.

use chumsky::prelude::*;
use chumsky::Stream;
use std::ops::Range;
use tracing::debug;

use crate::kexpr::ast::Document;
use crate::kexpr::lexer::{KexprLexer, Token};
use crate::kexpr::parser::document::document;
use crate::kexpr::parser::error::SyntaxError;

/// Type alias for token with span
type TokenSpan = (Token, Range<usize>);

/// A reusable kexpr parser.
///
/// The parser holds no state: the grammar combinators are built per call, so one value
/// can be shared freely and concurrent parses never observe each other.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KexprParser;

impl KexprParser {
    pub fn new() -> Self {
        Self
    }

    /// Tokenize and parse a complete source text
    pub fn parse(&self, source: &str) -> Result<Document, SyntaxError> {
        let mut lexer = KexprLexer::new(source);
        let eoi = source.len()..source.len();
        let result = document().parse(Stream::from_iter(eoi, lexer.by_ref()));

        if lexer.skipped() > 0 {
            debug!(
                skipped = lexer.skipped(),
                "ignored characters outside the notation"
            );
        }
        finish(result, source)
    }

    /// Parse an already tokenized source. `source` is only used to locate errors.
    pub fn parse_tokens(
        &self,
        tokens_with_spans: Vec<TokenSpan>,
        source: &str,
    ) -> Result<Document, SyntaxError> {
        let eoi = source.len()..source.len();
        let result = document().parse(Stream::from_iter(eoi, tokens_with_spans.into_iter()));
        finish(result, source)
    }
}

/// Parse a kexpr document from a token stream with spans
pub fn parse_tokens(
    tokens_with_spans: Vec<TokenSpan>,
    source: &str,
) -> Result<Document, SyntaxError> {
    KexprParser::new().parse_tokens(tokens_with_spans, source)
}

fn finish(
    result: Result<Document, Vec<Simple<Token>>>,
    source: &str,
) -> Result<Document, SyntaxError> {
    match result {
        Ok(doc) => {
            debug!(nodes = doc.nodes.len(), "parsed document");
            Ok(doc)
        }
        Err(errors) => {
            let error = errors
                .into_iter()
                .map(|error| SyntaxError::from_simple(error, source))
                .min_by_key(|error| error.span.start)
                .unwrap_or_else(|| end_of_input(source));
            debug!(%error, "parse failed");
            Err(error)
        }
    }
}

/// Fallback for a failed parse that reported no error value
fn end_of_input(source: &str) -> SyntaxError {
    let position = crate::kexpr::ast::SourceLocation::new(source).byte_to_position(source.len());
    SyntaxError {
        found: None,
        span: source.len()..source.len(),
        line: position.line,
        column: position.column,
        expected: Vec::new(),
    }
}
