//! TemplateEngine trait: the seam between documents and whatever expression
//! language renders them.
//!
//! A template engine resolves a template reference against a JSON context and
//! returns markup. Lookup and evaluation failures are both fatal to the
//! request that triggered them; the pipeline propagates them unmodified.

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during template processing.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("template '{0}' is not registered")]
    NotFound(String),

    #[error("template compilation failed: {0}")]
    Parse(String),

    #[error("template rendering failed: {0}")]
    Render(String),
}

/// A named-template rendering engine.
///
/// `template` is a reference (a registered name), not template source; how
/// references map to source is the engine's concern. The context is always a
/// JSON object assembled by the pipeline.
pub trait TemplateEngine: Send + Sync {
    /// Render the named template against the given context.
    fn render(&self, template: &str, context: &Value) -> Result<String, TemplateError>;

    /// A human-readable name for this engine (for logging).
    fn name(&self) -> &'static str;
}
