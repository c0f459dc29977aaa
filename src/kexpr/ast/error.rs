//! Error types for AST operations

use thiserror::Error;

/// Errors that can occur while building or editing a tree programmatically
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AstError {
    /// A key expression name that does not match `[a-zA-Z_][a-zA-Z_0-9]*`
    #[error("invalid key expression name: {0:?}")]
    InvalidName(String),
}
