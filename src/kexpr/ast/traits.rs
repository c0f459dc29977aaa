//! AST traits - Common interfaces for uniform node access
//!
//! The debug formatters walk the tree through this trait instead of matching every
//! element type themselves.

use super::elements::{CompoundGroup, Document, KeyExpression, Node};

/// Common interface for all tree nodes
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;
}

impl AstNode for KeyExpression {
    fn node_type(&self) -> &'static str {
        "KeyExpression"
    }

    fn display_label(&self) -> String {
        if self.properties.is_empty() {
            return self.name.clone();
        }
        let properties: Vec<String> = self.properties.iter().map(|p| p.to_string()).collect();
        format!("{} {}", self.name, properties.join(" "))
    }
}

impl AstNode for CompoundGroup {
    fn node_type(&self) -> &'static str {
        "CompoundGroup"
    }

    fn display_label(&self) -> String {
        format!("{} nodes", self.nodes.len())
    }
}

impl AstNode for Node {
    fn node_type(&self) -> &'static str {
        match self {
            Node::KeyExpression(expr) => expr.node_type(),
            Node::CompoundGroup(group) => group.node_type(),
        }
    }

    fn display_label(&self) -> String {
        match self {
            Node::KeyExpression(expr) => expr.display_label(),
            Node::CompoundGroup(group) => group.display_label(),
        }
    }
}

impl AstNode for Document {
    fn node_type(&self) -> &'static str {
        "Document"
    }

    fn display_label(&self) -> String {
        format!("{} nodes", self.nodes.len())
    }
}
