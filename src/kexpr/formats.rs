//! Output format implementations
//!
//! `notation` renders a tree back to kexpr text. `treeviz` is a debug view of the tree
//! structure, one line per node.

pub mod notation;
pub mod treeviz;

pub use notation::{serialize_document, serialize_node, NotationOptions, Serializer, ToNotation};
pub use treeviz::to_treeviz_str;
