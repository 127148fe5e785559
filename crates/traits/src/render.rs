//! RenderEngine trait and the composition types handed across it.
//!
//! The engine behind this trait is a black box that turns markup plus
//! stylesheets into finished document bytes. The pipeline never inspects the
//! bytes it gets back.

use std::fmt;
use thiserror::Error;
use url::Url;

use crate::resource::SharedResourceData;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("document encoding failed: {0}")]
    Encode(String),
    #[error("other render engine error: {0}")]
    Other(String),
}

impl From<&str> for EngineError {
    fn from(s: &str) -> Self {
        EngineError::Other(s.to_string())
    }
}

/// The rendering medium a composition targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaType {
    /// Paginated print output (the default for downloadable documents).
    #[default]
    Print,
    /// Continuous screen output.
    Screen,
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaType::Print => write!(f, "print"),
            MediaType::Screen => write!(f, "screen"),
        }
    }
}

/// A stylesheet reference together with its loaded bytes.
#[derive(Debug, Clone)]
pub struct ResolvedStylesheet {
    pub reference: String,
    pub data: SharedResourceData,
}

/// A unit of work for the render engine: markup, the medium to render for,
/// an optional absolute base URL for resolving relative references inside the
/// markup, and the stylesheets to apply, in cascade order.
///
/// A missing base URL is tolerated; relative references then fail to resolve
/// inside the engine, which degrades output rather than failing the request.
#[derive(Debug, Clone)]
pub struct Composition {
    pub markup: String,
    pub media_type: MediaType,
    pub base_url: Option<Url>,
    pub stylesheets: Vec<ResolvedStylesheet>,
}

impl Composition {
    pub fn new(markup: impl Into<String>) -> Self {
        Composition {
            markup: markup.into(),
            media_type: MediaType::default(),
            base_url: None,
            stylesheets: Vec::new(),
        }
    }

    pub fn with_media_type(mut self, media_type: MediaType) -> Self {
        self.media_type = media_type;
        self
    }

    pub fn with_base_url(mut self, base_url: Option<Url>) -> Self {
        self.base_url = base_url;
        self
    }
}

/// A document render engine: encodes a [`Composition`] into final bytes.
pub trait RenderEngine: Send + Sync {
    fn render(&self, composition: &Composition) -> Result<Vec<u8>, EngineError>;

    /// A human-readable name for this engine (for logging).
    fn name(&self) -> &'static str;
}
