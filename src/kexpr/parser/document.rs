//! Document-level parser responsible for parsing the entire kexpr document.

use chumsky::prelude::*;

use crate::kexpr::ast::{CompoundGroup, Document, Node};
use crate::kexpr::lexer::Token;
use crate::kexpr::parser::combinators::{key_expression, token, ParserError};

/// Build the node parser
///
/// Compound groups nest arbitrarily and must contain at least one node.
pub(crate) fn node() -> impl Parser<Token, Node, Error = ParserError> + Clone {
    recursive(|node| {
        let compound_group = node
            .repeated()
            .at_least(1)
            .delimited_by(token(Token::CompoundStart), token(Token::CompoundEnd))
            .map(|nodes| Node::CompoundGroup(CompoundGroup::with_nodes(nodes)));

        key_expression().map(Node::KeyExpression).or(compound_group)
    })
}

/// Parse a document
///
/// Parses the entire token stream; adjacent top-level nodes are collected into one flat
/// sequence and trailing tokens that do not start a node are an error.
pub fn document() -> impl Parser<Token, Document, Error = ParserError> + Clone {
    node()
        .repeated()
        .then_ignore(end())
        .map(Document::with_nodes)
}
