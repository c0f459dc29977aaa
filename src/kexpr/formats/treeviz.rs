//! Treeviz formatter for kexpr trees
//!
//! One line per node, with box-drawing connectors for the nesting:
//!
//! ```text
//! ├─ KeyExpression: web port=8080 host="example.org"...
//! └─ CompoundGroup: 2 nodes
//!   ├─ KeyExpression: db port=5432
//!   └─ CompoundGroup: 1 nodes
//!     └─ KeyExpression: replica
//! ```
//!
//! Labels come from [`AstNode::display_label`] and are truncated to 30 characters.

use crate::kexpr::ast::{AstNode, Document, Node};

const MAX_LABEL_CHARS: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(doc: &Document) -> String {
    let mut result = String::new();
    append_children(&mut result, &doc.nodes, "");
    result
}

fn append_node(result: &mut String, node: &Node, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    result.push_str(&format!(
        "{}{} {}: {}\n",
        prefix,
        connector,
        node.node_type(),
        truncate(&node.display_label(), MAX_LABEL_CHARS)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    append_children(result, node.children(), &child_prefix);
}

fn append_children(result: &mut String, children: &[Node], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        append_node(result, child, prefix, i + 1 == children.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kexpr::parser::parse_document;

    #[test]
    fn test_flat_document() {
        let doc = parse_document("a --> x=1 ; b --> ;").unwrap();
        assert_eq!(
            to_treeviz_str(&doc),
            "├─ KeyExpression: a x=1\n└─ KeyExpression: b\n"
        );
    }

    #[test]
    fn test_nested_prefixes() {
        let doc = parse_document("{ a --> ; { b --> ; } } c --> ;").unwrap();
        let expected = "\
├─ CompoundGroup: 2 nodes
│ ├─ KeyExpression: a
│ └─ CompoundGroup: 1 nodes
│   └─ KeyExpression: b
└─ KeyExpression: c
";
        assert_eq!(to_treeviz_str(&doc), expected);
    }

    #[test]
    fn test_long_labels_are_truncated() {
        let doc = parse_document(r#"settings --> description="a fairly long description" ;"#)
            .unwrap();
        let output = to_treeviz_str(&doc);
        assert_eq!(
            output,
            "└─ KeyExpression: settings description=\"a fairly...\n"
        );
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(to_treeviz_str(&Document::new()), "");
    }
}
