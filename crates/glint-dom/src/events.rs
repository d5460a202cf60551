//! DOM Events
//!
//! Minimal synchronous event dispatch. Events carry a type name and a target
//! node, nothing else; there is no bubbling and no payload.

use crate::NodeId;
use std::collections::HashMap;

/// A dispatched event
#[derive(Debug, Clone)]
pub struct Event {
    /// Event type name
    pub name: String,
    /// Node the event was dispatched from
    pub target: NodeId,
}

type Listener = Box<dyn FnMut(&Event)>;

/// Per-node listener table with synchronous dispatch
#[derive(Default)]
pub struct EventDispatcher {
    listeners: HashMap<NodeId, Vec<(String, Listener)>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for events of type `name` on `target`
    pub fn add_listener(
        &mut self,
        target: NodeId,
        name: &str,
        listener: impl FnMut(&Event) + 'static,
    ) {
        self.listeners
            .entry(target)
            .or_default()
            .push((name.to_string(), Box::new(listener)));
    }

    /// Dispatch an event of type `name` from `target`.
    ///
    /// Every matching listener runs before this returns. Returns the number
    /// of listeners invoked.
    pub fn dispatch(&mut self, target: NodeId, name: &str) -> usize {
        let event = Event {
            name: name.to_string(),
            target,
        };
        let mut invoked = 0;
        if let Some(entries) = self.listeners.get_mut(&target) {
            for (listened, listener) in entries.iter_mut() {
                if listened.as_str() == name {
                    listener(&event);
                    invoked += 1;
                }
            }
        }
        tracing::trace!(?target, name, invoked, "dispatched event");
        invoked
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("targets", &self.listeners.len())
            .finish()
    }
}
