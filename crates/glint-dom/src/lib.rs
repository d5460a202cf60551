//! glint DOM - host-platform substrate
//!
//! Arena-based DOM tree, synchronous event dispatch and a named element
//! registry. This is the platform the component layer materializes into.

mod error;
mod events;
mod node;
mod registry;
mod tree;

pub use error::{DomError, DomResult};
pub use events::{Event, EventDispatcher};
pub use node::{Attribute, ElementData, Node, NodeData, TextData};
pub use registry::{Registry, RegistryError};
pub use tree::{Children, Descendants, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Sentinel for "no node" in tree links
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check that this id refers to a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }
}
