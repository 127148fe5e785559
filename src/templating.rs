//! Handlebars adapter for the template engine boundary.

use folio_traits::{TemplateEngine, TemplateError};
use handlebars::Handlebars;
use serde_json::Value;

/// A [`TemplateEngine`] backed by a handlebars registry.
///
/// Templates are registered by name up front; document descriptors then
/// refer to them by that name. HTML escaping stays on — the markup this
/// engine produces feeds a browser-grade render engine.
pub struct HandlebarsEngine {
    registry: Handlebars<'static>,
}

impl HandlebarsEngine {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);
        HandlebarsEngine { registry }
    }

    /// Compile and register a template under `name`.
    pub fn register_template(&mut self, name: &str, source: &str) -> Result<(), TemplateError> {
        self.registry
            .register_template_string(name, source)
            .map_err(|e| TemplateError::Parse(e.to_string()))
    }

    /// Direct access to the underlying registry, for helpers and partials.
    pub fn registry_mut(&mut self) -> &mut Handlebars<'static> {
        &mut self.registry
    }
}

impl Default for HandlebarsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for HandlebarsEngine {
    fn render(&self, template: &str, context: &Value) -> Result<String, TemplateError> {
        if !self.registry.has_template(template) {
            return Err(TemplateError::NotFound(template.to_string()));
        }
        self.registry
            .render(template, context)
            .map_err(|e| TemplateError::Render(e.to_string()))
    }

    fn name(&self) -> &'static str {
        "HandlebarsEngine"
    }
}
