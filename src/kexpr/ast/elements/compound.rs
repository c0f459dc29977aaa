//! Compound group element definition

use super::key_expression::KeyExpression;
use super::node::Node;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The contents of a `{ ... }` block
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CompoundGroup {
    pub nodes: Vec<Node>,
}

impl CompoundGroup {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn with_nodes(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Append a node at the end of the group
    pub fn push(&mut self, node: impl Into<Node>) {
        self.nodes.push(node.into());
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Key expressions directly inside this group (not descending further)
    pub fn iter_key_expressions(&self) -> impl Iterator<Item = &KeyExpression> {
        self.nodes.iter().filter_map(|node| node.as_key_expression())
    }
}

impl fmt::Display for CompoundGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompoundGroup({} nodes)", self.nodes.len())
    }
}
