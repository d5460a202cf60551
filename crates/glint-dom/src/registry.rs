//! Element registry
//!
//! Named registry for custom element definitions: write-once per name,
//! with custom-element naming rules enforced at define time.

use std::collections::HashMap;
use thiserror::Error;

/// Registry errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Name violates custom-element naming rules
    #[error("invalid custom element name: {0}")]
    InvalidName(String),
    /// Name was already defined
    #[error("custom element name already defined: {0}")]
    AlreadyDefined(String),
}

/// Custom element registry, generic over the definition payload
#[derive(Debug, Default)]
pub struct Registry<T> {
    definitions: HashMap<String, T>,
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Self {
            definitions: HashMap::new(),
        }
    }

    /// Define a custom element.
    ///
    /// The name must contain a hyphen, start with a lowercase ASCII letter
    /// and not be one of the reserved hyphenated names. Each name can be
    /// defined exactly once.
    pub fn define(&mut self, name: &str, definition: T) -> Result<(), RegistryError> {
        if !Self::is_valid_name(name) {
            return Err(RegistryError::InvalidName(name.to_string()));
        }
        if self.definitions.contains_key(name) {
            return Err(RegistryError::AlreadyDefined(name.to_string()));
        }
        self.definitions.insert(name.to_string(), definition);
        tracing::debug!(name, "defined custom element");
        Ok(())
    }

    /// Get a definition by name
    pub fn get(&self, name: &str) -> Option<&T> {
        self.definitions.get(name)
    }

    /// Check if a name is defined
    pub fn is_defined(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// Validate a custom element name
    fn is_valid_name(name: &str) -> bool {
        // Must contain hyphen
        if !name.contains('-') {
            return false;
        }

        // Must start with lowercase letter
        if !name
            .chars()
            .next()
            .map(|c| c.is_ascii_lowercase())
            .unwrap_or(false)
        {
            return false;
        }

        // Reserved names
        let reserved = [
            "annotation-xml",
            "color-profile",
            "font-face",
            "font-face-src",
            "font-face-uri",
            "font-face-format",
            "font-face-name",
            "missing-glyph",
        ];
        if reserved.contains(&name) {
            return false;
        }

        true
    }
}
