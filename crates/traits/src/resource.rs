//! ResourceProvider trait for abstracting stylesheet and asset loading.
//!
//! The pipeline resolves stylesheet references through this trait so that
//! documents are not tied to any particular storage layout. A failed lookup
//! is an ordinary `Err(ResourceError::NotFound)`, never a panic — the
//! pipeline decides whether a missing resource is fatal.

use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;

/// Error type for resource loading operations.
#[derive(Error, Debug, Clone)]
pub enum ResourceError {
    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("failed to load resource '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ResourceError {
    fn from(err: std::io::Error) -> Self {
        ResourceError::Io(err.to_string())
    }
}

/// Shared resource data type (reference-counted bytes).
pub type SharedResourceData = Arc<Vec<u8>>;

/// A trait for resolving named resources (stylesheets, images) to their
/// contents.
///
/// Implementations may back the lookup with:
/// - Local filesystem directories (`FilesystemResourceProvider` in
///   `folio-resource`)
/// - Pre-populated memory ([`InMemoryResourceProvider`], always available)
/// - Anything else that can answer "these bytes belong to this reference"
///
/// # Example
///
/// ```ignore
/// let provider = InMemoryResourceProvider::new();
/// provider.add("print.css", css_bytes)?;
/// let data = provider.load("print.css")?;
/// ```
pub trait ResourceProvider: Send + Sync + Debug {
    /// Load a resource by its reference.
    ///
    /// Returns the resource bytes, shared, or [`ResourceError::NotFound`]
    /// when the reference does not resolve.
    fn load(&self, reference: &str) -> Result<SharedResourceData, ResourceError>;

    /// Check whether a reference resolves without loading it.
    fn exists(&self, reference: &str) -> bool;

    /// The base path relative references are resolved against, if the
    /// provider uses path-based resolution.
    fn base_path(&self) -> Option<&str> {
        None
    }

    /// A human-readable name for this provider (for logging).
    fn name(&self) -> &'static str;
}

/// An in-memory resource provider.
///
/// Resources must be added before they can be loaded. Works in any
/// environment and doubles as the pipeline's default (empty) provider, where
/// every lookup misses.
#[derive(Debug, Default)]
pub struct InMemoryResourceProvider {
    resources: std::sync::RwLock<std::collections::HashMap<String, SharedResourceData>>,
}

impl InMemoryResourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a resource under the given reference, replacing any previous
    /// entry.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::LoadFailed` if the internal lock is poisoned.
    pub fn add(&self, reference: impl Into<String>, data: Vec<u8>) -> Result<(), ResourceError> {
        let reference = reference.into();
        let mut resources = self
            .resources
            .write()
            .map_err(|_| ResourceError::LoadFailed {
                path: reference.clone(),
                message: "resource store lock poisoned".to_string(),
            })?;
        resources.insert(reference, Arc::new(data));
        Ok(())
    }

    /// Remove a resource, returning its data if it was present.
    pub fn remove(&self, reference: &str) -> Option<SharedResourceData> {
        self.resources.write().ok()?.remove(reference)
    }

    /// Number of stored resources. Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.resources.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.resources.read().map(|r| r.is_empty()).unwrap_or(true)
    }
}

impl ResourceProvider for InMemoryResourceProvider {
    fn load(&self, reference: &str) -> Result<SharedResourceData, ResourceError> {
        let resources = self
            .resources
            .read()
            .map_err(|_| ResourceError::LoadFailed {
                path: reference.to_string(),
                message: "resource store lock poisoned".to_string(),
            })?;
        resources
            .get(reference)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(reference.to_string()))
    }

    fn exists(&self, reference: &str) -> bool {
        self.resources
            .read()
            .map(|r| r.contains_key(reference))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "InMemoryResourceProvider"
    }
}
