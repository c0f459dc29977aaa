//! Name lookups over the node tree
//!
//! Searches descend into compound groups and report matches in depth-first pre-order,
//! i.e. in the order the key expressions appear in the source text.

use super::elements::{Document, KeyExpression, Node};
use std::slice;

/// Depth-first pre-order iterator over every key expression below a node list
pub struct KeyExpressions<'a> {
    stack: Vec<slice::Iter<'a, Node>>,
}

impl<'a> KeyExpressions<'a> {
    pub fn new(nodes: &'a [Node]) -> Self {
        Self {
            stack: vec![nodes.iter()],
        }
    }
}

impl<'a> Iterator for KeyExpressions<'a> {
    type Item = &'a KeyExpression;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let level = self.stack.last_mut()?;
            match level.next() {
                Some(Node::KeyExpression(expr)) => return Some(expr),
                Some(Node::CompoundGroup(group)) => self.stack.push(group.nodes.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// All key expressions named `name`, depth-first pre-order
pub fn find<'a>(document: &'a Document, name: &str) -> Vec<&'a KeyExpression> {
    document
        .iter_key_expressions()
        .filter(|expr| expr.name == name)
        .collect()
}

/// Mutable variant of [`find`]; the references come back in the same order
pub fn find_mut<'a>(document: &'a mut Document, name: &str) -> Vec<&'a mut KeyExpression> {
    let mut found = Vec::new();
    collect_mut(&mut document.nodes, name, &mut found);
    found
}

fn collect_mut<'a>(nodes: &'a mut [Node], name: &str, found: &mut Vec<&'a mut KeyExpression>) {
    for node in nodes {
        match node {
            Node::KeyExpression(expr) => {
                if expr.name == name {
                    found.push(expr);
                }
            }
            Node::CompoundGroup(group) => collect_mut(&mut group.nodes, name, found),
        }
    }
}
