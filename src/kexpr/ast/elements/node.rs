//! Node element definition
//!
//! Node is the tree's sum type: every element of a document or compound group is either
//! a key expression or a nested compound group.

use super::compound::CompoundGroup;
use super::key_expression::KeyExpression;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Node {
    KeyExpression(KeyExpression),
    CompoundGroup(CompoundGroup),
}

impl Node {
    pub fn is_key_expression(&self) -> bool {
        matches!(self, Node::KeyExpression(_))
    }

    pub fn is_compound_group(&self) -> bool {
        matches!(self, Node::CompoundGroup(_))
    }

    pub fn as_key_expression(&self) -> Option<&KeyExpression> {
        match self {
            Node::KeyExpression(expr) => Some(expr),
            Node::CompoundGroup(_) => None,
        }
    }

    pub fn as_key_expression_mut(&mut self) -> Option<&mut KeyExpression> {
        match self {
            Node::KeyExpression(expr) => Some(expr),
            Node::CompoundGroup(_) => None,
        }
    }

    pub fn as_compound_group(&self) -> Option<&CompoundGroup> {
        match self {
            Node::CompoundGroup(group) => Some(group),
            Node::KeyExpression(_) => None,
        }
    }

    pub fn as_compound_group_mut(&mut self) -> Option<&mut CompoundGroup> {
        match self {
            Node::CompoundGroup(group) => Some(group),
            Node::KeyExpression(_) => None,
        }
    }

    /// Child nodes, empty for a key expression
    pub fn children(&self) -> &[Node] {
        match self {
            Node::CompoundGroup(group) => &group.nodes,
            Node::KeyExpression(_) => &[],
        }
    }
}

impl From<KeyExpression> for Node {
    fn from(expr: KeyExpression) -> Self {
        Node::KeyExpression(expr)
    }
}

impl From<CompoundGroup> for Node {
    fn from(group: CompoundGroup) -> Self {
        Node::CompoundGroup(group)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::KeyExpression(expr) => write!(f, "{}", expr),
            Node::CompoundGroup(group) => write!(f, "{}", group),
        }
    }
}
