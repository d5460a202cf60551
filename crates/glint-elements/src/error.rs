//! Component errors

use glint_dom::{DomError, RegistryError};
use thiserror::Error;

/// Result type for component operations
pub type ComponentResult<T> = Result<T, ComponentError>;

/// Component operation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComponentError {
    /// The current main node contains no projection point
    #[error("no projection point in the current main node")]
    NoProjectionPoint,
    /// No main node has been materialized yet
    #[error("no main node has been materialized")]
    NoMainNode,
    /// Tag name has no registered definition
    #[error("no definition registered for element name: {0}")]
    NotRegistered(String),
    /// Substrate DOM failure
    #[error(transparent)]
    Dom(#[from] DomError),
    /// Host registry failure
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
