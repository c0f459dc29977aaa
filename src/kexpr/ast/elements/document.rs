//! Document element definition

use super::compound::CompoundGroup;
use super::key_expression::KeyExpression;
use super::node::Node;
use crate::kexpr::ast::lookup::{self, KeyExpressions};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A document is the ordered top-level node sequence produced by one parse
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Document {
    pub nodes: Vec<Node>,
}

impl Document {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn with_nodes(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Append a node at the end of the document
    pub fn push(&mut self, node: impl Into<Node>) {
        self.nodes.push(node.into());
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter_items(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn iter_compound_groups(&self) -> impl Iterator<Item = &CompoundGroup> {
        self.nodes.iter().filter_map(|node| node.as_compound_group())
    }

    /// Every key expression in the tree, depth-first pre-order
    pub fn iter_key_expressions(&self) -> KeyExpressions<'_> {
        KeyExpressions::new(&self.nodes)
    }

    /// All key expressions named `name`, depth-first pre-order
    pub fn find(&self, name: &str) -> Vec<&KeyExpression> {
        lookup::find(self, name)
    }

    /// Mutable variant of [`Document::find`], same order
    pub fn find_mut(&mut self, name: &str) -> Vec<&mut KeyExpression> {
        lookup::find_mut(self, name)
    }

    /// Number of key expressions in the whole tree
    pub fn count_key_expressions(&self) -> usize {
        self.iter_key_expressions().count()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Document({} nodes)", self.nodes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_push_keeps_order() {
        let mut doc = Document::new();
        doc.push(KeyExpression::new("a"));
        doc.push(CompoundGroup::with_nodes(vec![KeyExpression::new("b").into()]));
        doc.push(KeyExpression::new("c"));

        assert_eq!(doc.len(), 3);
        assert!(doc.nodes[0].is_key_expression());
        assert!(doc.nodes[1].is_compound_group());
        assert_eq!(doc.iter_compound_groups().count(), 1);
        assert_eq!(doc.count_key_expressions(), 3);
        assert_eq!(doc.to_string(), "Document(3 nodes)");
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::default();
        assert!(doc.is_empty());
        assert!(doc.find("anything").is_empty());
    }
}
