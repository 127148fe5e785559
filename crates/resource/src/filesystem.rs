//! Filesystem-based resource provider.
//!
//! Stylesheet references resolve relative to a base directory, typically the
//! static-file root the deployment serves documents from.
//!
//! # Security
//!
//! Resolved paths must remain inside the base directory. Absolute references
//! and traversal via `..` are rejected and reported as `NotFound`, the same
//! answer a genuinely missing stylesheet gets.

use folio_traits::{ResourceError, ResourceProvider, SharedResourceData};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// A resource provider rooted at a base directory.
#[derive(Debug)]
pub struct FilesystemResourceProvider {
    base_path: PathBuf,
    /// Canonicalized base path for containment checks
    canonical_base: Option<PathBuf>,
}

impl FilesystemResourceProvider {
    /// Creates a provider resolving references relative to `base_path`.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        let base = base_path.as_ref().to_path_buf();
        // Canonicalization can fail if the directory does not exist yet;
        // containment then falls back to a component check.
        let canonical = base.canonicalize().ok();
        Self {
            base_path: base,
            canonical_base: canonical,
        }
    }

    /// Returns the base directory for this provider.
    pub fn base(&self) -> &Path {
        &self.base_path
    }

    /// Resolves a reference against the base directory, or `None` when the
    /// reference is absolute or would escape the base.
    fn resolve_reference(&self, reference: &str) -> Option<PathBuf> {
        if Path::new(reference).is_absolute() {
            return None;
        }

        let full_path = self.base_path.join(reference);

        if let Ok(canonical) = full_path.canonicalize()
            && let Some(ref base) = self.canonical_base
        {
            if canonical.starts_with(base) {
                return Some(canonical);
            }
            return None;
        }

        // File may not exist; still refuse any reference that names a parent
        // directory.
        for component in Path::new(reference).components() {
            if let Component::ParentDir = component {
                return None;
            }
        }

        Some(full_path)
    }
}

impl ResourceProvider for FilesystemResourceProvider {
    fn load(&self, reference: &str) -> Result<SharedResourceData, ResourceError> {
        let full_path = self
            .resolve_reference(reference)
            .ok_or_else(|| ResourceError::NotFound(reference.to_string()))?;

        std::fs::read(&full_path).map(Arc::new).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ResourceError::NotFound(reference.to_string())
            } else {
                ResourceError::LoadFailed {
                    path: reference.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }

    fn exists(&self, reference: &str) -> bool {
        self.resolve_reference(reference)
            .map(|p| p.is_file())
            .unwrap_or(false)
    }

    fn base_path(&self) -> Option<&str> {
        self.base_path.to_str()
    }

    fn name(&self) -> &'static str {
        "FilesystemResourceProvider"
    }
}
