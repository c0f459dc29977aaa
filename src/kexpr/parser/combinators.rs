//! Parser combinator functions for building the kexpr parser.
//!
//! Every combinator works on the token stream produced by
//! [`KexprLexer`](crate::kexpr::lexer::KexprLexer), with byte spans attached by the stream.

use chumsky::error::Error as _;
use chumsky::prelude::*;
use std::ops::Range;

use crate::kexpr::ast::{KeyExpression, ListItem, Property, PropertyValue};
use crate::kexpr::lexer::Token;

/// Byte range of a token in the source
pub(crate) type Span = Range<usize>;

/// Type alias for parser error
pub(crate) type ParserError = Simple<Token>;

/// Representative tokens for the value kinds, used to fill the expected set of errors
fn value_kinds() -> Vec<Option<Token>> {
    vec![
        Some(Token::Number(0)),
        Some(Token::Identifier(String::new())),
        Some(Token::String(String::new())),
    ]
}

/// Helper: match a specific punctuation token, ignoring it
pub(crate) fn token(t: Token) -> impl Parser<Token, (), Error = ParserError> + Clone {
    just(t).ignored()
}

/// An identifier, yielding its text
pub(crate) fn identifier() -> impl Parser<Token, String, Error = ParserError> + Clone {
    filter_map(|span: Span, tok: Token| match tok {
        Token::Identifier(name) => Ok(name),
        other => Err(ParserError::expected_input_found(
            span,
            vec![Some(Token::Identifier(String::new()))],
            Some(other),
        )),
    })
}

/// A scalar value: number, bare identifier or quoted string
pub(crate) fn list_item() -> impl Parser<Token, ListItem, Error = ParserError> + Clone {
    filter_map(|span: Span, tok: Token| match tok {
        Token::Number(n) => Ok(ListItem::Number(n)),
        Token::Identifier(name) => Ok(ListItem::Atom(name)),
        Token::String(text) => Ok(ListItem::Text(text)),
        other => Err(ParserError::expected_input_found(
            span,
            value_kinds(),
            Some(other),
        )),
    })
}

/// A flat, possibly empty `[ ... ]` list
pub(crate) fn list_value() -> impl Parser<Token, PropertyValue, Error = ParserError> + Clone {
    list_item()
        .repeated()
        .delimited_by(token(Token::ListBegin), token(Token::ListEnd))
        .map(PropertyValue::List)
}

/// Right-hand side of `name=value`
pub(crate) fn property_value() -> impl Parser<Token, PropertyValue, Error = ParserError> + Clone {
    list_item().map(PropertyValue::from).or(list_value())
}

/// `name=value`
pub(crate) fn property() -> impl Parser<Token, Property, Error = ParserError> + Clone {
    identifier()
        .then_ignore(token(Token::Equals))
        .then(property_value())
        .map(|(name, value)| Property { name, value })
}

/// `name --> property* ;`
pub(crate) fn key_expression() -> impl Parser<Token, KeyExpression, Error = ParserError> + Clone {
    identifier()
        .then_ignore(token(Token::Arrow))
        .then(property().repeated())
        .then_ignore(token(Token::Semicolon))
        .map(|(name, properties)| KeyExpression::with_properties(name, properties))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kexpr::lexer::tokenize;

    fn run<O>(
        parser: impl Parser<Token, O, Error = ParserError>,
        source: &str,
    ) -> Result<O, Vec<ParserError>> {
        parser.then_ignore(end()).parse(tokenize(source))
    }

    #[test]
    fn test_identifier() {
        assert_eq!(run(identifier(), "foo"), Ok("foo".to_string()));
        assert!(run(identifier(), "5").is_err());
    }

    #[test]
    fn test_scalar_values() {
        assert_eq!(run(property_value(), "-4"), Ok(PropertyValue::Number(-4)));
        assert_eq!(run(property_value(), "bar"), Ok(PropertyValue::atom("bar")));
        assert_eq!(
            run(property_value(), "\"a b\""),
            Ok(PropertyValue::text("a b"))
        );
    }

    #[test]
    fn test_list_values() {
        assert_eq!(run(list_value(), "[]"), Ok(PropertyValue::List(vec![])));
        assert_eq!(
            run(list_value(), "[1 x \"y\"]"),
            Ok(PropertyValue::List(vec![
                ListItem::Number(1),
                ListItem::atom("x"),
                ListItem::text("y")
            ]))
        );
    }

    #[test]
    fn test_nested_lists_are_rejected() {
        assert!(run(list_value(), "[1 [2]]").is_err());
    }

    #[test]
    fn test_property() {
        assert_eq!(run(property(), "a=1"), Ok(Property::new("a", 1i64)));
        assert!(run(property(), "a 1").is_err());
        assert!(run(property(), "a=").is_err());
    }

    #[test]
    fn test_key_expression_without_properties() {
        assert_eq!(run(key_expression(), "foo --> ;"), Ok(KeyExpression::new("foo")));
    }

    #[test]
    fn test_key_expression_requires_terminator() {
        assert!(run(key_expression(), "foo --> a=1").is_err());
        assert!(run(key_expression(), "foo a=1 ;").is_err());
    }
}
