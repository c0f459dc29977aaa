//! Element types of the kexpr tree

pub mod compound;
pub mod document;
pub mod key_expression;
pub mod node;
pub mod property;
pub mod value;

pub use compound::CompoundGroup;
pub use document::Document;
pub use key_expression::{is_identifier, KeyExpression};
pub use node::Node;
pub use property::Property;
pub use value::{ListItem, PropertyValue};
