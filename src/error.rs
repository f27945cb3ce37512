//! Typed error handling for constify.
//!
//! Provides structured errors that library consumers can match on.
//! Unresolvable semantic queries are deliberately NOT errors: the classifier
//! fails closed and reports "not eligible" instead (see `classify`).

use thiserror::Error;

use crate::syntax::NodeId;

/// Main error type for constify operations.
///
/// This provides typed errors that library consumers can match on,
/// unlike opaque `anyhow::Error` types.
#[derive(Error, Debug)]
pub enum ConstifyError {
    /// Caller broke a contract, e.g. rewriting an already-const declaration.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A node id named no declaration in the target unit.
    #[error("No declaration with id {id} in unit")]
    NodeNotFound { id: NodeId },

    /// Generic internal error.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ConstifyError {
    /// Create an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a node-not-found error.
    pub fn node_not_found(id: NodeId) -> Self {
        Self::NodeNotFound { id }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Convenience type alias for constify results.
pub type ConstifyResult<T> = Result<T, ConstifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = ConstifyError::invalid_argument("declaration is already const");
        assert!(matches!(err, ConstifyError::InvalidArgument { .. }));
        assert!(err.to_string().contains("already const"));
    }

    #[test]
    fn test_node_not_found_carries_id() {
        let err = ConstifyError::node_not_found(NodeId(7));
        assert!(err.to_string().contains("#7"));
    }
}
