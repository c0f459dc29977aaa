use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::kexpr::ast::{CompoundGroup, Document, KeyExpression, Node};

/// Layout knobs for the notation output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotationOptions {
    /// Indentation added per compound group nesting level
    pub indent_string: String,
}

impl Default for NotationOptions {
    fn default() -> Self {
        Self {
            indent_string: "    ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Serializer {
    options: NotationOptions,
}

impl Serializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: NotationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &NotationOptions {
        &self.options
    }

    pub fn serialize_document(&self, doc: &Document) -> String {
        let mut output = String::new();
        for node in &doc.nodes {
            self.write_node(node, 0, &mut output);
        }
        trace!(nodes = doc.nodes.len(), bytes = output.len(), "serialized document");
        output
    }

    pub fn serialize_node(&self, node: &Node) -> String {
        let mut output = String::new();
        self.write_node(node, 0, &mut output);
        output
    }

    fn write_node(&self, node: &Node, depth: usize, output: &mut String) {
        match node {
            Node::KeyExpression(expr) => self.write_key_expression(expr, depth, output),
            Node::CompoundGroup(group) => self.write_compound_group(group, depth, output),
        }
    }

    fn write_key_expression(&self, expr: &KeyExpression, depth: usize, output: &mut String) {
        self.write_indent(depth, output);
        output.push_str(&expr.name);
        output.push_str("   -->   ");
        for property in &expr.properties {
            output.push_str(&property.to_string());
            output.push(' ');
        }
        output.push_str(";\n");
    }

    fn write_compound_group(&self, group: &CompoundGroup, depth: usize, output: &mut String) {
        self.write_indent(depth, output);
        output.push_str("{\n");
        for child in &group.nodes {
            self.write_node(child, depth + 1, output);
        }
        self.write_indent(depth, output);
        output.push_str("}\n");
    }

    fn write_indent(&self, depth: usize, output: &mut String) {
        for _ in 0..depth {
            output.push_str(&self.options.indent_string);
        }
    }
}

/// Serialize a document with the default layout
pub fn serialize_document(doc: &Document) -> String {
    Serializer::new().serialize_document(doc)
}

/// Serialize a single node as if it were at the top level
pub fn serialize_node(node: &Node) -> String {
    Serializer::new().serialize_node(node)
}

/// Types that can be rendered back to kexpr text
pub trait ToNotation {
    fn to_notation(&self) -> String;
}

impl ToNotation for Document {
    fn to_notation(&self) -> String {
        serialize_document(self)
    }
}

impl ToNotation for Node {
    fn to_notation(&self) -> String {
        serialize_node(self)
    }
}

impl ToNotation for KeyExpression {
    fn to_notation(&self) -> String {
        let mut output = String::new();
        Serializer::new().write_key_expression(self, 0, &mut output);
        output
    }
}
