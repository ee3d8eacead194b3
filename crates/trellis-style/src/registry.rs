//! Named variant specs for component libraries.
//!
//! A [`VariantRegistry`] maps component names ("button", "badge") to their
//! validated [`VariantSpec`]s so view code can resolve a class list without
//! holding the spec itself. Registration happens once at startup; lookups
//! afterwards are read-only.

use ahash::AHashMap;

use crate::variant::{VariantError, VariantRequest, VariantSpec};

/// Registry of component variant specs, keyed by component name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariantRegistry {
    specs: AHashMap<String, VariantSpec>,
}

impl VariantRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `spec` under `name`, returning the spec it replaced, if any.
    pub fn register(&mut self, name: impl Into<String>, spec: VariantSpec) -> Option<VariantSpec> {
        let name = name.into();
        let previous = self.specs.insert(name.clone(), spec);
        if previous.is_some() {
            tracing::debug!(component = %name, "replacing registered variant spec");
        }
        previous
    }

    /// The spec registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&VariantSpec> {
        self.specs.get(name)
    }

    /// Whether a spec is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.specs.contains_key(name)
    }

    /// Number of registered components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Registered component names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.specs.keys().map(String::as_str)
    }

    /// Resolve `request` against the spec registered under `name`.
    pub fn resolve(&self, name: &str, request: &VariantRequest) -> Result<String, VariantError> {
        let Some(spec) = self.specs.get(name) else {
            return Err(VariantError::UnknownComponent {
                name: name.to_string(),
            });
        };
        spec.resolve(request)
    }
}
