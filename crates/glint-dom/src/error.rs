//! DOM operation errors

use crate::NodeId;
use thiserror::Error;

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// Node id does not refer to a node in this tree
    #[error("node {0:?} not found")]
    NotFound(NodeId),
    /// Operation requires an element node
    #[error("node {0:?} is not an element")]
    NotAnElement(NodeId),
    /// A shadow root was already attached to this element
    #[error("element {0:?} already has a shadow root")]
    ShadowAlreadyAttached(NodeId),
}
