//! Document model: metadata, descriptors, and the handler capability trait.

use chrono::{DateTime, Utc};
use folio_traits::{Composition, MediaType};
use serde_json::{Map, Value};

use crate::error::HookError;
use crate::request::RenderRequest;

/// Static document metadata, merged into every rendering context.
#[derive(Debug, Clone)]
pub struct DocumentMeta {
    pub title: String,
    pub author: String,
    pub description: String,
    pub keywords: Vec<String>,
    /// Generator tag embedded in the produced document.
    pub generator: String,
    pub created: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
}

impl Default for DocumentMeta {
    fn default() -> Self {
        DocumentMeta {
            title: "Untitled document".to_string(),
            author: String::new(),
            description: String::new(),
            keywords: Vec::new(),
            generator: concat!("folio ", env!("CARGO_PKG_VERSION")).to_string(),
            created: None,
            modified: None,
        }
    }
}

/// Static configuration for one document type.
///
/// Authored by the integrator, owned by its handler, and immutable once the
/// handler is registered. The registry references handlers (and through them
/// descriptors) by `Arc`; nothing is copied at registration time.
#[derive(Debug, Clone)]
pub struct DocumentDescriptor {
    /// Registry identifier override; the handler type name applies when
    /// unset.
    pub name: Option<String>,
    /// Route segment the registry derives the endpoint pattern from. An
    /// independent namespace from the registry identifier.
    pub route_name: String,
    /// Template reference handed to the template engine.
    pub template: String,
    /// Stylesheet references, in cascade order.
    pub stylesheets: Vec<String>,
    /// Download filename stem; the handler type name applies when unset.
    pub filename: Option<String>,
    /// Restrict the document to authenticated principals.
    pub login_required: bool,
    pub media_type: MediaType,
    pub meta: DocumentMeta,
}

impl DocumentDescriptor {
    pub fn new(route_name: impl Into<String>, template: impl Into<String>) -> Self {
        DocumentDescriptor {
            name: None,
            route_name: route_name.into(),
            template: template.into(),
            stylesheets: Vec::new(),
            filename: None,
            login_required: true,
            media_type: MediaType::default(),
            meta: DocumentMeta::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_stylesheets(
        mut self,
        references: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.stylesheets = references.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_filename(mut self, stem: impl Into<String>) -> Self {
        self.filename = Some(stem.into());
        self
    }

    pub fn with_login_required(mut self, login_required: bool) -> Self {
        self.login_required = login_required;
        self
    }

    pub fn with_media_type(mut self, media_type: MediaType) -> Self {
        self.media_type = media_type;
        self
    }

    pub fn with_meta(mut self, meta: DocumentMeta) -> Self {
        self.meta = meta;
        self
    }
}

/// The per-document capability set.
///
/// Implementations own a [`DocumentDescriptor`] and may override any of the
/// hook methods; every default delegates to the descriptor. The registry
/// validates descriptors at registration time, so hooks can assume a
/// well-formed descriptor at request time.
pub trait DocumentHandler: Send + Sync {
    fn descriptor(&self) -> &DocumentDescriptor;

    /// The handler's type name. Fallback for both the registry identifier
    /// and the download filename.
    fn type_name(&self) -> &'static str;

    /// Called before any rendering work. Suitable for quota checks, download
    /// counters, or data priming. Errors abort the request and surface to
    /// the caller unmodified.
    fn pre_create(&self, _request: &RenderRequest) -> Result<(), HookError> {
        Ok(())
    }

    /// The template reference to render for this request.
    fn template_name(&self) -> &str {
        &self.descriptor().template
    }

    /// Extends the assembled context with per-request values.
    fn extend_context(&self, _request: &RenderRequest, _context: &mut Map<String, Value>) {}

    /// Builds the composition unit for the render engine. The pipeline
    /// attaches resolved stylesheets afterwards.
    fn compose(&self, markup: String, request: &RenderRequest) -> Composition {
        Composition::new(markup)
            .with_media_type(self.descriptor().media_type)
            .with_base_url(request.base_url().cloned())
    }

    /// The download filename stem, without extension.
    fn filename_stem(&self, _request: &RenderRequest) -> String {
        match &self.descriptor().filename {
            Some(stem) => stem.clone(),
            None => self.type_name().to_string(),
        }
    }
}
