//! Syntax errors
//!
//! A failed parse reports the first token the grammar could not accept, where it is, and
//! what would have been accepted instead.

use chumsky::prelude::Simple;
use std::ops::Range;
use thiserror::Error;

use crate::kexpr::ast::SourceLocation;
use crate::kexpr::lexer::Token;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "syntax error at line {line}, column {column}: unexpected {}{}",
    describe_found(.found),
    describe_expected(.expected)
)]
pub struct SyntaxError {
    /// The offending token, `None` when the input ended too early
    pub found: Option<Token>,
    /// Byte range of the offending token in the source
    pub span: Range<usize>,
    /// 1-based line of the offending token
    pub line: usize,
    /// 1-based column (in characters) of the offending token
    pub column: usize,
    /// Kinds of tokens that would have been accepted, sorted
    pub expected: Vec<String>,
}

impl SyntaxError {
    pub(crate) fn from_simple(error: Simple<Token>, source: &str) -> Self {
        let span = error.span();
        let position = SourceLocation::new(source).byte_to_position(span.start);

        let mut expected: Vec<String> = error
            .expected()
            .map(|token| match token {
                Some(token) => token.kind().to_string(),
                None => "end of input".to_string(),
            })
            .collect();
        expected.sort();
        expected.dedup();

        Self {
            found: error.found().cloned(),
            span,
            line: position.line,
            column: position.column,
            expected,
        }
    }

    /// True if the input ended before the grammar was satisfied
    pub fn is_end_of_input(&self) -> bool {
        self.found.is_none()
    }
}

fn describe_found(found: &Option<Token>) -> String {
    match found {
        None => "end of input".to_string(),
        Some(Token::Identifier(name)) => format!("identifier `{}`", name),
        Some(Token::Number(n)) => format!("number `{}`", n),
        Some(Token::OutOfRangeNumber(literal)) => {
            format!("number `{}` (out of range for a 64-bit integer)", literal)
        }
        Some(Token::String(text)) => format!("string \"{}\"", text),
        Some(token) => token.kind().to_string(),
    }
}

fn describe_expected(expected: &[String]) -> String {
    if expected.is_empty() {
        String::new()
    } else {
        format!(", expected {}", expected.join(" or "))
    }
}
