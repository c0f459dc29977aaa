//! Implementation of the kexpr lexer
//!
//! Tokenization itself is handled by logos. [`KexprLexer`] wraps the logos lexer to
//! attach absolute byte spans, keep a line counter, and enforce the skip-one-and-continue
//! recovery policy for characters the notation does not know.

use crate::kexpr::lexer::tokens::{LexError, Token};
use logos::Logos;
use std::ops::Range;
use tracing::trace;

/// Single-pass token stream over one source text.
///
/// Yields `(Token, byte_span)` pairs. Unrecognized input never ends the stream: exactly one
/// character is dropped and lexing resumes at the next one.
pub struct KexprLexer<'source> {
    source: &'source str,
    inner: logos::Lexer<'source, Token>,
    /// Byte offset of `inner`'s input within `source`
    offset: usize,
    /// Byte offset up to which newlines have been counted
    counted: usize,
    line: usize,
    skipped: usize,
}

impl<'source> KexprLexer<'source> {
    pub fn new(source: &'source str) -> Self {
        Self {
            source,
            inner: Token::lexer(source),
            offset: 0,
            counted: 0,
            line: 1,
            skipped: 0,
        }
    }

    /// 1-based line of the end of the last consumed input
    pub fn line(&self) -> usize {
        self.line
    }

    /// Number of characters dropped so far because they are not part of the notation
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    fn advance_to(&mut self, end: usize) {
        self.line += self.source[self.counted..end].matches('\n').count();
        self.counted = end;
    }

    fn restart_at(&mut self, position: usize) {
        self.offset = position;
        self.inner = Token::lexer(&self.source[position..]);
    }
}

impl<'source> Iterator for KexprLexer<'source> {
    type Item = (Token, Range<usize>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let result = self.inner.next()?;
            let local = self.inner.span();
            let span = (local.start + self.offset)..(local.end + self.offset);

            match result {
                Ok(token) => {
                    self.advance_to(span.end);
                    return Some((token, span));
                }
                Err(LexError::NumberOutOfRange) => {
                    self.advance_to(span.end);
                    let literal = self.source[span.clone()].to_string();
                    trace!(line = self.line, %literal, "number does not fit in i64");
                    return Some((Token::OutOfRangeNumber(literal), span));
                }
                Err(LexError::Unrecognized) => {
                    // logos may reject a longer prefix (e.g. `--x` or an unterminated string);
                    // only its first character is dropped
                    let width = self.source[span.start..]
                        .chars()
                        .next()
                        .map_or(1, char::len_utf8);
                    let resume = span.start + width;
                    self.skipped += 1;
                    trace!(
                        line = self.line,
                        offset = span.start,
                        skipped = &self.source[span.start..resume],
                        "dropping unrecognized character"
                    );
                    self.advance_to(resume);
                    if span.end != resume {
                        self.restart_at(resume);
                    }
                }
            }
        }
    }
}

/// Convenience function to tokenize a string and collect all tokens
pub fn tokenize(source: &str) -> Vec<Token> {
    KexprLexer::new(source).map(|(token, _)| token).collect()
}

/// Convenience function to tokenize a string and collect tokens with their spans
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, Range<usize>)> {
    KexprLexer::new(source).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> Token {
        Token::Identifier(name.to_string())
    }

    #[test]
    fn test_simple_key_expression() {
        let tokens = tokenize("foo --> a=1 ;");
        assert_eq!(
            tokens,
            vec![
                ident("foo"),
                Token::Arrow,
                ident("a"),
                Token::Equals,
                Token::Number(1),
                Token::Semicolon
            ]
        );
    }

    #[test]
    fn test_list_and_string_values() {
        let tokens = tokenize(r#"c=[1 "two" three]"#);
        assert_eq!(
            tokens,
            vec![
                ident("c"),
                Token::Equals,
                Token::ListBegin,
                Token::Number(1),
                Token::String("two".to_string()),
                ident("three"),
                Token::ListEnd
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), vec![]);
    }

    #[test]
    fn test_comment_only_input() {
        assert_eq!(tokenize("# just a comment"), vec![]);
    }

    #[test]
    fn test_comment_stops_at_newline() {
        assert_eq!(tokenize("# comment\nfoo"), vec![ident("foo")]);
    }

    #[test]
    fn test_unknown_characters_are_dropped() {
        let mut lexer = KexprLexer::new("fo$o @--> ;");
        let tokens: Vec<Token> = lexer.by_ref().map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![ident("fo"), ident("o"), Token::Arrow, Token::Semicolon]
        );
        assert_eq!(lexer.skipped(), 2);
    }

    #[test]
    fn test_broken_arrow_drops_one_character_at_a_time() {
        // `-` `-` cannot start anything, `x` is still lexed
        let mut lexer = KexprLexer::new("--x");
        let tokens: Vec<Token> = lexer.by_ref().map(|(t, _)| t).collect();
        assert_eq!(tokens, vec![ident("x")]);
        assert_eq!(lexer.skipped(), 2);

        // The second `-` still signs the number
        assert_eq!(tokenize("--5"), vec![Token::Number(-5)]);
    }

    #[test]
    fn test_number_out_of_range_is_kept_whole() {
        let mut lexer = KexprLexer::new("a=9223372036854775807 b=9223372036854775808 c=-9223372036854775809");
        let tokens: Vec<(Token, Range<usize>)> = lexer.by_ref().collect();
        assert_eq!(tokens[2], (Token::Number(i64::MAX), 2..21));
        assert_eq!(
            tokens[5],
            (Token::OutOfRangeNumber("9223372036854775808".to_string()), 24..43)
        );
        assert_eq!(
            tokens[8],
            (Token::OutOfRangeNumber("-9223372036854775809".to_string()), 46..66)
        );
        assert_eq!(tokens.len(), 9);
        assert_eq!(lexer.skipped(), 0);
    }

    #[test]
    fn test_unterminated_string_drops_only_the_quote() {
        assert_eq!(tokenize("\"abc"), vec![ident("abc")]);
    }

    #[test]
    fn test_non_ascii_is_dropped_whole() {
        assert_eq!(tokenize("a√b"), vec![ident("a"), ident("b")]);
    }

    #[test]
    fn test_spans_are_absolute_after_recovery() {
        let tokens = tokenize_with_spans("--x ;");
        assert_eq!(tokens, vec![(ident("x"), 2..3), (Token::Semicolon, 4..5)]);
    }

    #[test]
    fn test_line_counter() {
        let mut lexer = KexprLexer::new("a\n\nb # c\n\nd");
        assert_eq!(lexer.line(), 1);
        assert_eq!(lexer.next().map(|(t, _)| t), Some(ident("a")));
        assert_eq!(lexer.line(), 1);
        assert_eq!(lexer.next().map(|(t, _)| t), Some(ident("b")));
        assert_eq!(lexer.line(), 3);
        assert_eq!(lexer.next().map(|(t, _)| t), Some(ident("d")));
        assert_eq!(lexer.line(), 5);
        assert_eq!(lexer.next(), None);
    }
}
