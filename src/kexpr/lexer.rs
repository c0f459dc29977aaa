//! Lexer module for the kexpr format
//!
//! This module contains the tokenization logic for the kexpr format,
//! including token definitions and the lexer implementation.
//!
//! Recovery
//!
//! The lexer never fails. Characters outside the notation's alphabet are dropped one at a
//! time and lexing resumes right after them, so `foo$ --> ;` lexes exactly like
//! `foo --> ;`. A signed digit run is always lexed whole: if its value does not fit in an
//! `i64` it becomes [`Token::OutOfRangeNumber`], which the grammar rejects. Whether
//! malformed input is rejected is decided by the grammar alone.
//! Comments (`#` up to the end of the line) and whitespace leave no trace in the stream.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{tokenize, tokenize_with_spans, KexprLexer};
pub use tokens::{LexError, Token};
