//! AST definitions and utilities for the kexpr format
//!
//! This module provides the tree model produced by the parser and consumed by the
//! serializer, along with the accessors and mutators that operate on it in place.
//!
//! ## Modules
//!
//! - `elements` - Document, Node, KeyExpression, CompoundGroup, Property and value types
//! - `lookup` - Depth-first search over the node tree
//! - `position` - Line/column positions for byte offsets
//! - `traits` - Uniform access used by the debug formatters
//! - `error` - Error types for AST operations

pub mod elements;
pub mod error;
pub mod lookup;
pub mod position;
pub mod traits;

pub use elements::{
    is_identifier, CompoundGroup, Document, KeyExpression, ListItem, Node, Property,
    PropertyValue,
};
pub use error::AstError;
pub use lookup::{find, find_mut, KeyExpressions};
pub use position::{Position, SourceLocation};
pub use traits::AstNode;
