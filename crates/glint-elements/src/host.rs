//! Host aggregate
//!
//! Owns the DOM arena, the element registry, the event dispatcher and the
//! optional injector capability. One `Host` per page-equivalent; everything
//! runs single-threaded and synchronously on it.

use crate::component::{Component, ElementDefinition};
use crate::error::{ComponentError, ComponentResult};
use crate::util::{Injector, NoInjector};
use glint_dom::{DomTree, Event, EventDispatcher, NodeId, Registry};

/// The host platform a component materializes into
pub struct Host {
    dom: DomTree,
    registry: Registry<ElementDefinition>,
    events: EventDispatcher,
    injector: Box<dyn Injector>,
}

impl Host {
    pub fn new() -> Self {
        Self::with_injector(Box::new(NoInjector))
    }

    /// Create a host with an adopter-supplied injector capability
    pub fn with_injector(injector: Box<dyn Injector>) -> Self {
        Self {
            dom: DomTree::new(),
            registry: Registry::new(),
            events: EventDispatcher::new(),
            injector,
        }
    }

    pub fn dom(&self) -> &DomTree {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut DomTree {
        &mut self.dom
    }

    pub fn registry(&self) -> &Registry<ElementDefinition> {
        &self.registry
    }

    pub(crate) fn registry_mut(&mut self) -> &mut Registry<ElementDefinition> {
        &mut self.registry
    }

    /// Register a listener for events of type `name` on `target`
    pub fn add_event_listener(
        &mut self,
        target: NodeId,
        name: &str,
        listener: impl FnMut(&Event) + 'static,
    ) {
        self.events.add_listener(target, name, listener);
    }

    /// Dispatch an event synchronously; returns the number of listeners
    /// invoked
    pub fn dispatch(&mut self, target: NodeId, name: &str) -> usize {
        self.events.dispatch(target, name)
    }

    /// Instantiate a registered element name.
    ///
    /// Creates the host element, attaches the encapsulation root and runs
    /// the definition's build function exactly once, all before returning.
    pub fn instantiate(&mut self, name: &str) -> ComponentResult<Component> {
        let definition = self
            .registry
            .get(name)
            .cloned()
            .ok_or_else(|| ComponentError::NotRegistered(name.to_string()))?;
        let element = self.dom.create_element(name);
        let mut component = Component::allocate(self, element, definition.template.clone())?;
        component.run_build(self, &definition.build);
        tracing::debug!(name, "instantiated custom element");
        Ok(component)
    }

    pub fn inject_style(&mut self, root: NodeId, css: &str) {
        self.injector.inject_style(&mut self.dom, root, css);
    }

    pub fn inject_script(&mut self, root: NodeId, source: &str) {
        self.injector.inject_script(&mut self.dom, root, source);
    }

    pub fn inject_script_link(&mut self, root: NodeId, url: &str) {
        self.injector.inject_script_link(&mut self.dom, root, url);
    }

    pub fn inject_scoped_style(&mut self, root: NodeId, selector: &str) {
        self.injector.inject_scoped_style(&mut self.dom, root, selector);
    }
}

impl Default for Host {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Host {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Host")
            .field("nodes", &self.dom.len())
            .field("events", &self.events)
            .finish()
    }
}
