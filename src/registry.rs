//! Document registry: identifier → handler mapping and route derivation.
//!
//! The registry is populated once at startup (usually via
//! [`crate::discovery::autodiscover`]) and read-only afterwards. Mutation
//! takes `&mut self`, so steady-state request handling shares the registry
//! freely while the borrow checker rules out concurrent registration.

use indexmap::IndexMap;
use log::debug;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::document::DocumentHandler;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("the document '{0}' is already registered")]
    AlreadyRegistered(String),
    #[error("the document '{0}' is not registered")]
    NotRegistered(String),
    #[error("the document '{name}' is not a valid document handler: {reason}")]
    InvalidHandler { name: String, reason: String },
}

/// A routable entry derived from a registered handler.
#[derive(Clone)]
pub struct Route {
    /// The registry identifier the handler is stored under.
    pub identifier: String,
    /// Endpoint pattern derived from the descriptor's route name.
    pub pattern: String,
    pub handler: Arc<dyn DocumentHandler>,
}

/// In-memory mapping of document identifiers to handlers.
///
/// Identifiers are unique across the registry. Route names are not — whether
/// two documents may share one is the external router's concern. Entries keep
/// registration order so route enumeration is deterministic.
pub struct DocumentRegistry {
    name: String,
    entries: IndexMap<String, Arc<dyn DocumentHandler>>,
}

impl DocumentRegistry {
    pub fn new() -> Self {
        Self::with_name("documents")
    }

    /// A registry with a custom namespace name, surfaced next to its routes
    /// when several registries coexist in one application.
    pub fn with_name(name: impl Into<String>) -> Self {
        DocumentRegistry {
            name: name.into(),
            entries: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Effective registry key: explicit name, else the descriptor's declared
    /// name, else the handler's type name.
    fn effective_name(handler: &dyn DocumentHandler, explicit: Option<&str>) -> String {
        if let Some(name) = explicit {
            return name.to_string();
        }
        match &handler.descriptor().name {
            Some(name) => name.clone(),
            None => handler.type_name().to_string(),
        }
    }

    fn validate(name: &str, handler: &dyn DocumentHandler) -> Result<(), RegistryError> {
        let descriptor = handler.descriptor();
        if descriptor.template.is_empty() {
            return Err(RegistryError::InvalidHandler {
                name: name.to_string(),
                reason: "empty template reference".to_string(),
            });
        }
        if descriptor.route_name.is_empty() {
            return Err(RegistryError::InvalidHandler {
                name: name.to_string(),
                reason: "empty route name".to_string(),
            });
        }
        Ok(())
    }

    /// Register a handler, optionally under an explicit name.
    ///
    /// All checks run before any mutation; a failed registration leaves the
    /// registry exactly as it was.
    pub fn register(
        &mut self,
        handler: Arc<dyn DocumentHandler>,
        name: Option<&str>,
    ) -> Result<(), RegistryError> {
        let key = Self::effective_name(handler.as_ref(), name);
        if self.entries.contains_key(&key) {
            return Err(RegistryError::AlreadyRegistered(key));
        }
        Self::validate(&key, handler.as_ref())?;

        debug!("registering document '{}'", key);
        self.entries.insert(key, handler);
        Ok(())
    }

    /// Remove a handler, optionally by explicit name.
    ///
    /// Fails with [`RegistryError::NotRegistered`] when the name is absent
    /// *or* when the stored handler is not the one passed in — unregistering
    /// through a name someone else now owns must not remove their entry.
    pub fn unregister(
        &mut self,
        handler: &Arc<dyn DocumentHandler>,
        name: Option<&str>,
    ) -> Result<(), RegistryError> {
        let key = Self::effective_name(handler.as_ref(), name);
        match self.entries.get(&key) {
            None => Err(RegistryError::NotRegistered(key)),
            Some(stored) if !Arc::ptr_eq(stored, handler) => {
                Err(RegistryError::NotRegistered(key))
            }
            Some(_) => {
                debug!("unregistering document '{}'", key);
                self.entries.shift_remove(&key);
                Ok(())
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn DocumentHandler>> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered documents, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn DocumentHandler>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Routable entries, in registration order. The pattern comes from each
    /// descriptor's route name, not from the registry identifier.
    pub fn routes(&self) -> Vec<Route> {
        self.entries
            .iter()
            .map(|(identifier, handler)| Route {
                identifier: identifier.clone(),
                pattern: format!("/{}/", handler.descriptor().route_name),
                handler: Arc::clone(handler),
            })
            .collect()
    }
}

impl Default for DocumentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DocumentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentRegistry")
            .field("name", &self.name)
            .field("documents", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}
