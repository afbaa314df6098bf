//! DOM operation errors

use crate::NodeId;

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// No node with this ID exists in the tree
    #[error("node {0} not found")]
    NotFound(NodeId),

    /// Insertion would make a node its own ancestor
    #[error("hierarchy request error: {child} cannot be inserted under {parent}")]
    HierarchyRequest { parent: NodeId, child: NodeId },

    /// Node kind cannot take part in the operation
    #[error("invalid node type for {0}")]
    InvalidNodeType(NodeId),

    /// Node is not a child of the given parent
    #[error("{child} is not a child of {parent}")]
    NotAChild { parent: NodeId, child: NodeId },

    /// Attribute operation on a non-element
    #[error("node {0} is not an element")]
    NotAnElement(NodeId),

    /// Element has the wrong tag for a typed view
    #[error("expected <{expected}> at {node}, found <{found}>")]
    WrongElement {
        node: NodeId,
        expected: &'static str,
        found: String,
    },

    /// Element is no longer connected to its document
    #[error("node {0} is detached from its document")]
    Detached(NodeId),
}
