// src/error.rs
//! Defines the unified error types for request-time pipeline operations.

use folio_traits::{EngineError, ResourceError, TemplateError};
use thiserror::Error;

use crate::registry::RegistryError;

/// Error type for integrator-supplied hooks. Hook failures surface to the
/// caller unmodified; the pipeline performs no translation.
pub type HookError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The main error enum for all high-level operations within the pipeline.
///
/// Everything here is fatal to the request that raised it. The single
/// recovered condition — a stylesheet reference that does not resolve — never
/// becomes an error at all; it is logged and skipped inside the pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("document '{0}' requires an authenticated principal")]
    PermissionDenied(String),
    #[error("{0}")]
    Hook(HookError),
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
    #[error("stylesheet loading failed: {0}")]
    Stylesheet(ResourceError),
    #[error("render engine error: {0}")]
    Engine(#[from] EngineError),
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
}
