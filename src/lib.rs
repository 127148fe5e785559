//! # folio – registry-driven template-to-PDF document endpoints
//!
//! Folio renders server-side templates into downloadable paginated documents
//! on demand. A [`DocumentRegistry`] maps logical document names to
//! [`DocumentHandler`] implementations and derives routable endpoint
//! patterns from them; a [`DocumentPipeline`] runs the per-request stages:
//!
//! 1. **Authorize** – reject anonymous principals for restricted documents
//! 2. **Pre-create** – fire the handler's hook (quotas, counters)
//! 3. **Context** – merge document metadata with handler extensions
//! 4. **Render** – evaluate the named template ([`templating`])
//! 5. **Collect** – resolve stylesheets, skipping unresolved references
//! 6. **Compose** – markup + media type + base URL ([`folio_traits`])
//! 7. **Encode** – hand the composition to the render engine
//!
//! The HTTP server, template expression language, and the actual
//! HTML-to-PDF engine are external collaborators behind the boundary traits
//! re-exported below.
//!
//! # Example
//!
//! ```ignore
//! let mut registry = DocumentRegistry::new();
//! autodiscover(&mut registry, &config, INSTALLED_PACKAGES)?;
//!
//! let pipeline = DocumentPipeline::builder()
//!     .with_template_engine(Arc::new(templates))
//!     .with_render_engine(Arc::new(engine))
//!     .with_stylesheet_provider(Arc::new(FilesystemResourceProvider::new("static")))
//!     .build()?;
//!
//! for route in registry.routes() {
//!     // mount route.pattern on the external router
//! }
//! ```

pub mod discovery;
pub mod document;
pub mod error;
pub mod pipeline;
pub mod registry;
pub mod request;
pub mod response;
pub mod templating;

pub use discovery::{DiscoveryConfig, DocumentProvider, DocumentsHook, autodiscover};
pub use document::{DocumentDescriptor, DocumentHandler, DocumentMeta};
pub use error::{HookError, PipelineError};
pub use pipeline::{DOCUMENT_EXTENSION, DocumentPipeline, PipelineBuilder};
pub use registry::{DocumentRegistry, RegistryError, Route};
pub use request::{Principal, RenderRequest};
pub use response::{
    DOWNLOAD_COOKIE, DocumentPayload, PDF_CONTENT_TYPE, PREVIEW_CONTENT_TYPE, RenderedDocument,
};
pub use templating::HandlebarsEngine;

// Re-export the boundary traits alongside the pipeline that consumes them.
pub use folio_resource::FilesystemResourceProvider;
pub use folio_traits::{
    Composition, EngineError, InMemoryResourceProvider, MediaType, RenderEngine,
    ResolvedStylesheet, ResourceError, ResourceProvider, SharedResourceData, TemplateEngine,
    TemplateError,
};
