//! kexpr notation output
//!
//! The serializer is the inverse of the parser for well-formed trees: parsing its output
//! yields an equal [`Document`](crate::kexpr::ast::Document).
//!
//! ## Format
//!
//! ```text
//! web   -->   port=8080 tags=[edge public ] ;
//! {
//!     db   -->   port=5432 ;
//!     {
//!         replica   -->   ;
//!     }
//! }
//! ```
//!
//! - Every key expression ends with ` ;` and a newline; each property is followed by one space.
//! - List elements are each followed by one space, so an empty list is `[]`.
//! - A compound group's braces sit at its own depth; its children one indent deeper.
//! - The top level has no enclosing braces.

mod serializer;

pub use serializer::{serialize_document, serialize_node, NotationOptions, Serializer, ToNotation};
