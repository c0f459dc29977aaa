//! Fluent assertion API for kexpr trees

use super::testing_matchers::TextMatch;
use crate::kexpr::ast::{CompoundGroup, Document, KeyExpression, Node, PropertyValue};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a document
pub fn assert_doc(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

fn summarize_nodes(nodes: &[Node]) -> String {
    nodes
        .iter()
        .map(|node| match node {
            Node::KeyExpression(expr) => format!("KeyExpression({})", expr.name),
            Node::CompoundGroup(group) => format!("CompoundGroup({})", group.nodes.len()),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn assert_node_count(nodes: &[Node], expected: usize, context: &str) {
    let actual = nodes.len();
    assert_eq!(
        actual,
        expected,
        "{}: Expected {} nodes, found {} nodes: [{}]",
        context,
        expected,
        actual,
        summarize_nodes(nodes)
    );
}

fn node_at<'a>(nodes: &'a [Node], index: usize, context: &str) -> &'a Node {
    assert!(
        index < nodes.len(),
        "{}: Node index {} out of bounds ({} nodes)",
        context,
        index,
        nodes.len()
    );
    &nodes[index]
}

// ============================================================================
// Document Assertions
// ============================================================================

pub struct DocumentAssertion<'a> {
    doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    /// Assert the number of top-level nodes
    pub fn node_count(self, expected: usize) -> Self {
        assert_node_count(&self.doc.nodes, expected, "document");
        self
    }

    /// Assert the document has no nodes at all
    pub fn no_nodes(self) -> Self {
        self.node_count(0)
    }

    /// Assert on a specific top-level node by index
    pub fn node<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let node = node_at(&self.doc.nodes, index, "document");
        assertion(NodeAssertion {
            node,
            context: format!("nodes[{}]", index),
        });
        self
    }

    /// Assert how many key expressions `find` returns for `name`
    pub fn finds(self, name: &str, expected: usize) -> Self {
        let actual = self.doc.find(name).len();
        assert_eq!(
            actual, expected,
            "document: Expected {} key expressions named '{}', found {}",
            expected, name, actual
        );
        self
    }
}

// ============================================================================
// Node Assertions
// ============================================================================

pub struct NodeAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    /// Assert this node is a key expression and return key-expression assertions
    pub fn assert_key_expression(self) -> KeyExpressionAssertion<'a> {
        match self.node {
            Node::KeyExpression(expr) => KeyExpressionAssertion {
                expr,
                context: self.context,
            },
            Node::CompoundGroup(group) => panic!(
                "{}: Expected KeyExpression, found CompoundGroup with {} nodes",
                self.context,
                group.nodes.len()
            ),
        }
    }

    /// Assert this node is a compound group and return group assertions
    pub fn assert_compound_group(self) -> CompoundGroupAssertion<'a> {
        match self.node {
            Node::CompoundGroup(group) => CompoundGroupAssertion {
                group,
                context: self.context,
            },
            Node::KeyExpression(expr) => panic!(
                "{}: Expected CompoundGroup, found KeyExpression '{}'",
                self.context, expr.name
            ),
        }
    }

    /// Check if this node is a key expression (non-panicking)
    pub fn is_key_expression(&self) -> bool {
        self.node.is_key_expression()
    }

    /// Check if this node is a compound group (non-panicking)
    pub fn is_compound_group(&self) -> bool {
        self.node.is_compound_group()
    }
}

// ============================================================================
// Key Expression Assertions
// ============================================================================

pub struct KeyExpressionAssertion<'a> {
    expr: &'a KeyExpression,
    context: String,
}

impl<'a> KeyExpressionAssertion<'a> {
    /// Assert exact name match
    pub fn name(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.expr.name, &self.context);
        self
    }

    /// Assert the number of properties (duplicates included)
    pub fn property_count(self, expected: usize) -> Self {
        let actual = self.expr.properties.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} properties, found {}: [{}]",
            self.context,
            expected,
            actual,
            self.expr
                .properties
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        );
        self
    }

    /// Assert the first property called `name` has exactly `expected` as value
    pub fn property(self, name: &str, expected: PropertyValue) -> Self {
        let actual = self.expr.get_property(name);
        assert_eq!(
            actual,
            Some(&expected),
            "{}: Expected property '{}' to be {:?}, found {:?}",
            self.context,
            name,
            expected,
            actual
        );
        self
    }

    /// Assert the first property called `name` is the given number
    pub fn number(self, name: &str, expected: i64) -> Self {
        self.property(name, PropertyValue::Number(expected))
    }

    /// Assert the first property called `name` is the given bare identifier
    pub fn atom(self, name: &str, expected: &str) -> Self {
        self.property(name, PropertyValue::atom(expected))
    }

    /// Assert the first property called `name` is a quoted string matching `expected`
    pub fn text(self, name: &str, expected: TextMatch) -> Self {
        match self.expr.get_property(name) {
            Some(PropertyValue::Text(actual)) => {
                expected.assert(actual, &format!("{}.{}", self.context, name))
            }
            other => panic!(
                "{}: Expected text property '{}', found {:?}",
                self.context, name, other
            ),
        }
        self
    }

    /// Assert the first property called `name` is a string, an identifier, or a list with an
    /// item whose text satisfies `expected`
    pub fn value_matches(self, name: &str, expected: TextMatch) -> Self {
        let actual = self.expr.get_property(name);
        assert!(
            actual.is_some_and(|value| expected.matches_value(value)),
            "{}.{}: expected a value with text {}, found {:?}",
            self.context,
            name,
            expected,
            actual
        );
        self
    }

    /// Assert there is no property called `name`
    pub fn no_property(self, name: &str) -> Self {
        assert!(
            !self.expr.has_property(name),
            "{}: Expected no property '{}'",
            self.context,
            name
        );
        self
    }

    /// Assert the property names, in list order
    pub fn property_names(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.expr.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            actual, expected,
            "{}: Unexpected property names",
            self.context
        );
        self
    }
}

// ============================================================================
// Compound Group Assertions
// ============================================================================

pub struct CompoundGroupAssertion<'a> {
    group: &'a CompoundGroup,
    context: String,
}

impl<'a> CompoundGroupAssertion<'a> {
    /// Assert the number of direct child nodes
    pub fn node_count(self, expected: usize) -> Self {
        assert_node_count(&self.group.nodes, expected, &self.context);
        self
    }

    /// Assert on a specific child node by index
    pub fn node<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let node = node_at(&self.group.nodes, index, &self.context);
        assertion(NodeAssertion {
            node,
            context: format!("{}.nodes[{}]", self.context, index),
        });
        self
    }
}
