// src/pipeline.rs
//! The per-request document pipeline.
//!
//! One [`DocumentPipeline`] serves every registered document; the handler
//! supplies the per-document configuration and hooks. Each request runs the
//! same ordered stages: authorization gate, pre-create hook, context
//! assembly, template rendering, the preview early-exit, stylesheet
//! collection, composition, and encoding.

use chrono::{DateTime, Utc};
use folio_traits::{
    InMemoryResourceProvider, RenderEngine, ResolvedStylesheet, ResourceError, ResourceProvider,
    TemplateEngine,
};
use log::{debug, warn};
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::document::DocumentHandler;
use crate::error::PipelineError;
use crate::request::RenderRequest;
use crate::response::{DocumentPayload, RenderedDocument};

/// Extension appended to every download filename.
pub const DOCUMENT_EXTENSION: &str = "pdf";

/// The document generation pipeline.
///
/// Holds the three external collaborators — template engine, render engine,
/// and stylesheet provider — behind their boundary traits. Handling a
/// request is synchronous and shares no mutable state, so one pipeline can
/// be used from any number of request threads.
pub struct DocumentPipeline {
    templates: Arc<dyn TemplateEngine>,
    engine: Arc<dyn RenderEngine>,
    stylesheets: Arc<dyn ResourceProvider>,
}

impl std::fmt::Debug for DocumentPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentPipeline").finish_non_exhaustive()
    }
}

impl DocumentPipeline {
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Run the full pipeline for one request.
    ///
    /// Returns either preview markup or a finished document payload. Every
    /// error propagates to the caller unmodified except an unresolvable
    /// stylesheet reference, which is logged and skipped.
    pub fn handle(
        &self,
        handler: &dyn DocumentHandler,
        request: &RenderRequest,
    ) -> Result<RenderedDocument, PipelineError> {
        let descriptor = handler.descriptor();

        if descriptor.login_required && !request.principal().is_authenticated() {
            return Err(PipelineError::PermissionDenied(
                handler.type_name().to_string(),
            ));
        }

        handler.pre_create(request).map_err(PipelineError::Hook)?;

        let context = self.build_context(handler, request);
        let markup = self
            .templates
            .render(handler.template_name(), &Value::Object(context))?;

        if request.preview() {
            return Ok(RenderedDocument::Preview(markup));
        }

        let resolved = self.collect_stylesheets(handler)?;
        let mut composition = handler.compose(markup, request);
        composition.stylesheets = resolved;

        debug!(
            "encoding document '{}' via {}",
            handler.type_name(),
            self.engine.name()
        );
        let bytes = self.engine.render(&composition)?;

        let filename = format!("{}.{}", handler.filename_stem(request), DOCUMENT_EXTENSION);
        Ok(RenderedDocument::Document(DocumentPayload { bytes, filename }))
    }

    fn build_context(
        &self,
        handler: &dyn DocumentHandler,
        request: &RenderRequest,
    ) -> Map<String, Value> {
        let meta = &handler.descriptor().meta;
        let mut context = Map::new();
        context.insert("title".to_string(), Value::String(meta.title.clone()));
        context.insert("author".to_string(), Value::String(meta.author.clone()));
        context.insert(
            "description".to_string(),
            Value::String(meta.description.clone()),
        );
        context.insert(
            "keywords".to_string(),
            Value::String(meta.keywords.join(", ")),
        );
        context.insert(
            "generator".to_string(),
            Value::String(meta.generator.clone()),
        );
        // The modified timestamp feeds both keys; templates rely on them
        // matching.
        context.insert("created".to_string(), timestamp_value(meta.modified));
        context.insert("modified".to_string(), timestamp_value(meta.modified));

        handler.extend_context(request, &mut context);
        context
    }

    /// Resolve the descriptor's stylesheet references, preserving
    /// declaration order. A reference that does not resolve degrades visual
    /// fidelity but must not block delivery.
    fn collect_stylesheets(
        &self,
        handler: &dyn DocumentHandler,
    ) -> Result<Vec<ResolvedStylesheet>, PipelineError> {
        let references = &handler.descriptor().stylesheets;
        let mut resolved = Vec::with_capacity(references.len());
        for reference in references {
            match self.stylesheets.load(reference) {
                Ok(data) => resolved.push(ResolvedStylesheet {
                    reference: reference.clone(),
                    data,
                }),
                Err(ResourceError::NotFound(_)) => {
                    warn!("could not find stylesheet '{}', skipping", reference);
                }
                Err(err) => return Err(PipelineError::Stylesheet(err)),
            }
        }
        Ok(resolved)
    }
}

fn timestamp_value(timestamp: Option<DateTime<Utc>>) -> Value {
    match timestamp {
        Some(timestamp) => Value::String(timestamp.to_rfc3339()),
        None => Value::String(String::new()),
    }
}

/// Fluent builder for [`DocumentPipeline`].
///
/// The template and render engines are required; the stylesheet provider
/// defaults to an empty in-memory provider, under which every stylesheet
/// reference is skipped as unresolved.
#[derive(Default)]
pub struct PipelineBuilder {
    templates: Option<Arc<dyn TemplateEngine>>,
    engine: Option<Arc<dyn RenderEngine>>,
    stylesheets: Option<Arc<dyn ResourceProvider>>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template_engine(mut self, templates: Arc<dyn TemplateEngine>) -> Self {
        self.templates = Some(templates);
        self
    }

    pub fn with_render_engine(mut self, engine: Arc<dyn RenderEngine>) -> Self {
        self.engine = Some(engine);
        self
    }

    pub fn with_stylesheet_provider(mut self, provider: Arc<dyn ResourceProvider>) -> Self {
        self.stylesheets = Some(provider);
        self
    }

    pub fn build(self) -> Result<DocumentPipeline, PipelineError> {
        let templates = self
            .templates
            .ok_or_else(|| PipelineError::Config("no template engine provided".to_string()))?;
        let engine = self
            .engine
            .ok_or_else(|| PipelineError::Config("no render engine provided".to_string()))?;
        let stylesheets = self
            .stylesheets
            .unwrap_or_else(|| Arc::new(InMemoryResourceProvider::new()));

        Ok(DocumentPipeline {
            templates,
            engine,
            stylesheets,
        })
    }
}
