pub mod fixtures;

use std::sync::Arc;

use self::fixtures::{CountingProvider, StubEngine};
use folio::{DocumentPipeline, HandlebarsEngine, PipelineError};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Everything a pipeline test needs to inspect afterwards.
pub struct TestPipeline {
    pub pipeline: DocumentPipeline,
    pub provider: Arc<CountingProvider>,
    pub engine: Arc<StubEngine>,
}

/// Build a pipeline around the given handlebars engine and stylesheet set,
/// keeping handles to the counting provider and the stub render engine.
pub fn build_pipeline(
    templates: HandlebarsEngine,
    stylesheets: &[(&str, &str)],
) -> Result<TestPipeline, PipelineError> {
    let provider = Arc::new(CountingProvider::with_stylesheets(stylesheets));
    let engine = Arc::new(StubEngine::default());

    let pipeline = DocumentPipeline::builder()
        .with_template_engine(Arc::new(templates))
        .with_render_engine(engine.clone())
        .with_stylesheet_provider(provider.clone())
        .build()?;

    Ok(TestPipeline {
        pipeline,
        provider,
        engine,
    })
}

/// A handlebars engine preloaded with the fixture templates.
pub fn default_templates() -> HandlebarsEngine {
    let mut templates = HandlebarsEngine::new();
    templates
        .register_template("report", "<h1>{{title}}</h1>")
        .expect("fixture template must compile");
    templates
        .register_template("timestamps", "{{created}}|{{modified}}")
        .expect("fixture template must compile");
    templates
}
