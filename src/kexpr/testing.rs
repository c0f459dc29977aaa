//! Testing utilities for tree assertions
//!
//! # Parser Testing Guidelines
//!
//! What we want from a parser test is assurance on the whole tree shape: which nodes are
//! key expressions, which are compound groups, what each one contains and in what order.
//! Asserting node counts alone is not informative, and hand-written `match` ladders over
//! nested groups get long fast.
//!
//! Use [`assert_doc`] with its fluent API instead:
//!
//! ```rust,ignore
//! use kexpr::kexpr::parser::parse_document;
//! use kexpr::kexpr::testing::assert_doc;
//!
//! let doc = parse_document("a --> x=1 ; { b --> ; }").unwrap();
//!
//! assert_doc(&doc)
//!     .node_count(2)
//!     .node(0, |node| {
//!         node.assert_key_expression()
//!             .name("a")
//!             .property_count(1)
//!             .number("x", 1);
//!     })
//!     .node(1, |node| {
//!         node.assert_compound_group()
//!             .node_count(1)
//!             .node(0, |child| {
//!                 child.assert_key_expression().name("b").property_count(0);
//!             });
//!     });
//! ```
//!
//! For sample-driven tests, load documents through
//! [`KexprSources`](crate::kexpr::processor::samples::KexprSources) rather than copying
//! notation text into every test.

mod testing_assertions;
mod testing_matchers;

pub use testing_assertions::{
    assert_doc, CompoundGroupAssertion, DocumentAssertion, KeyExpressionAssertion,
    NodeAssertion,
};
pub use testing_matchers::TextMatch;
