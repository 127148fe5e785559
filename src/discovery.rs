//! Startup document discovery over a statically declared package list.
//!
//! The process configuration lists application package names in order; each
//! installed package may contribute a documents hook whose side effect is to
//! register its handlers. The configuration is allowed to name packages that
//! are not installed or that ship no documents — those are skipped, not
//! errors.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::registry::{DocumentRegistry, RegistryError};

/// Registration hook contributed by a document-providing package.
pub type DocumentsHook = fn(&mut DocumentRegistry) -> Result<(), RegistryError>;

/// A statically declared application package.
#[derive(Clone, Copy)]
pub struct DocumentProvider {
    /// Package name as it appears in the discovery configuration.
    pub name: &'static str,
    /// Registration hook; `None` when the package ships no documents.
    pub documents: Option<DocumentsHook>,
}

/// Ordered package list, read once at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    pub packages: Vec<String>,
}

impl DiscoveryConfig {
    pub fn new(packages: impl IntoIterator<Item = impl Into<String>>) -> Self {
        DiscoveryConfig {
            packages: packages.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Walk the configured package list and fire each matching documents hook.
///
/// The scan itself registers nothing. Registration failures propagate
/// immediately — a half-populated registry at startup is harder to diagnose
/// than a failed boot. Call this once from the composition root; calling it
/// again re-fires every hook, and duplicate registrations then fail.
pub fn autodiscover(
    registry: &mut DocumentRegistry,
    config: &DiscoveryConfig,
    installed: &[DocumentProvider],
) -> Result<(), RegistryError> {
    for package in &config.packages {
        let Some(provider) = installed.iter().find(|p| p.name == package) else {
            debug!("no installed package named '{}', skipping", package);
            continue;
        };
        let Some(hook) = provider.documents else {
            debug!("package '{}' provides no documents, skipping", package);
            continue;
        };
        debug!("loading documents from package '{}'", package);
        hook(registry)?;
    }
    Ok(())
}
