//! Token definitions for the kexpr format
//!
//! This module defines all the tokens that can be produced by the kexpr lexer.
//! The tokens are defined using the logos derive macro for efficient tokenization.
//! Whitespace, newlines and `#` comments are skipped by logos itself; line tracking
//! happens in [`KexprLexer`](super::KexprLexer).
use logos::Logos;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why logos rejected a stretch of input
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum LexError {
    /// Not part of the notation; [`KexprLexer`](super::KexprLexer) drops one character
    #[default]
    Unrecognized,
    /// A complete `[-+]?[0-9]+` run whose value does not fit in an `i64`
    NumberOutOfRange,
}

/// All possible tokens in the kexpr format
#[derive(Logos, Debug, PartialEq, Eq, Clone, Hash, Serialize, Deserialize)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\n]+")]
#[logos(skip r"#[^\n]*")]
pub enum Token {
    #[token("-->")]
    Arrow,

    #[token("=")]
    Equals,

    #[token(";")]
    Semicolon,

    #[token("{")]
    CompoundStart,

    #[token("}")]
    CompoundEnd,

    #[token("[")]
    ListBegin,

    #[token("]")]
    ListEnd,

    #[regex(r"[-+]?[0-9]+", |lex| {
        lex.slice().parse::<i64>().map_err(|_| LexError::NumberOutOfRange)
    })]
    Number(i64),

    /// Digit run too large for a [`Token::Number`], kept whole with its sign.
    /// Produced by [`KexprLexer`](super::KexprLexer); no grammar rule accepts it.
    OutOfRangeNumber(String),

    // No escaping: the first `"` after the opening one closes the string
    #[regex(r#""[^"]*""#, |lex| {
        let slice = lex.slice();
        slice[1..slice.len() - 1].to_string()
    })]
    String(String),

    #[regex(r"[a-zA-Z_][a-zA-Z_0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
}

impl Token {
    /// Short human readable name of the token kind, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Token::Arrow => "'-->'",
            Token::Equals => "'='",
            Token::Semicolon => "';'",
            Token::CompoundStart => "'{'",
            Token::CompoundEnd => "'}'",
            Token::ListBegin => "'['",
            Token::ListEnd => "']'",
            Token::Number(_) => "number",
            Token::OutOfRangeNumber(_) => "out-of-range number",
            Token::String(_) => "string",
            Token::Identifier(_) => "identifier",
        }
    }

    /// Check if this token can appear as a property value or list element
    pub fn is_value(&self) -> bool {
        matches!(
            self,
            Token::Number(_) | Token::String(_) | Token::Identifier(_)
        )
    }

    /// Check if this token is one of the single-character or arrow punctuation tokens
    pub fn is_punctuation(&self) -> bool {
        !self.is_value() && !matches!(self, Token::OutOfRangeNumber(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Arrow => write!(f, "<arrow>"),
            Token::Equals => write!(f, "<equals>"),
            Token::Semicolon => write!(f, "<semicolon>"),
            Token::CompoundStart => write!(f, "<compound-start>"),
            Token::CompoundEnd => write!(f, "<compound-end>"),
            Token::ListBegin => write!(f, "<list-begin>"),
            Token::ListEnd => write!(f, "<list-end>"),
            Token::Number(n) => write!(f, "<number:{}>", n),
            Token::OutOfRangeNumber(s) => write!(f, "<out-of-range-number:{}>", s),
            Token::String(s) => write!(f, "<string:{}>", s),
            Token::Identifier(s) => write!(f, "<ident:{}>", s),
        }
    }
}
