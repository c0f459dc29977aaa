//! # kexpr
//!
//! A parser and serializer for the kexpr key-expression notation.
//!
//! A kexpr document is a sequence of named key expressions carrying typed
//! properties, optionally grouped into nested `{ ... }` compound groups:
//!
//! ```text
//! # servers
//! web --> port=8080 host="example.org" tags=[edge public] ;
//! {
//!     db --> port=5432 ;
//! }
//! ```
//!
//! ## Testing
//!
//! For testing guidelines, see the [testing module](kexpr::testing).

pub mod kexpr;

pub use kexpr::ast::{
    AstError, CompoundGroup, Document, KeyExpression, ListItem, Node, Property, PropertyValue,
};
pub use kexpr::formats::{serialize_document, serialize_node};
pub use kexpr::parser::{parse_document, KexprParser, SyntaxError};
