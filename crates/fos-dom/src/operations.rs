//! DOM Node Operations
//!
//! Error type shared by tree mutation and selector parsing.

use crate::NodeId;

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Node not found
    #[error("node {0:?} not found")]
    NotFound(NodeId),
    /// Hierarchy error (e.g., inserting ancestor)
    #[error("hierarchy request error")]
    HierarchyRequest,
    /// Operation needs an element node
    #[error("node {0:?} is not an element")]
    NotAnElement(NodeId),
    /// Node is not a child
    #[error("node {0:?} is not a child of the given parent")]
    NotAChild(NodeId),
    /// Selector could not be parsed
    #[error("invalid selector `{0}`")]
    InvalidSelector(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DomError::InvalidSelector("a > b".into()).to_string(),
            "invalid selector `a > b`"
        );
        assert_eq!(DomError::HierarchyRequest.to_string(), "hierarchy request error");
    }
}
