//! glint elements - custom element authoring core
//!
//! Define custom element types whose rendering lives in an isolated shadow
//! subtree built from markup fragments, with a single projection point where
//! an instance's logical children appear.
//!
//! # Example
//! ```rust,ignore
//! use glint_elements::{register, ElementDefinition, Host};
//!
//! let mut host = Host::new();
//! let definition = ElementDefinition::new(|component, host| {
//!     component.add(host, None);
//!     component.add_stylesheet_link(host, "badge.css");
//! })
//! .with_template(|| "<div><slot></slot></div>".to_string());
//!
//! register(&mut host, "x-badge", definition)?;
//! let badge = host.instantiate("x-badge")?;
//! ```

mod component;
mod error;
mod host;
pub mod util;

pub use component::{BuildFn, Component, ElementDefinition, Materialized, TemplateFn};
pub use error::{ComponentError, ComponentResult};
pub use host::Host;
pub use util::{Injector, NoInjector};

// Re-export the substrate for embeddings and tests
pub use glint_dom as dom;
pub use glint_html as html;

use glint_dom::RegistryError;

/// Bind `definition` to tag `name` in the host registry.
///
/// On success the definition is returned unchanged, enabling inline
/// assignment patterns. Name validation and duplicate detection happen in
/// the host registry; its failure propagates unmodified.
pub fn register(
    host: &mut Host,
    name: &str,
    definition: ElementDefinition,
) -> Result<ElementDefinition, RegistryError> {
    host.registry_mut().define(name, definition.clone())?;
    Ok(definition)
}
