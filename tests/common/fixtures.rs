use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use folio::{
    Composition, DocumentDescriptor, DocumentHandler, EngineError, HookError,
    InMemoryResourceProvider, RenderEngine, RenderRequest, ResourceError, ResourceProvider,
    SharedResourceData,
};
use serde_json::{Map, Value};

/// Render engine stub: returns a PDF-looking buffer and records the last
/// composition it received.
#[derive(Debug, Default)]
pub struct StubEngine {
    last: Mutex<Option<Composition>>,
}

impl StubEngine {
    pub fn last_composition(&self) -> Option<Composition> {
        self.last.lock().unwrap().clone()
    }
}

impl RenderEngine for StubEngine {
    fn render(&self, composition: &Composition) -> Result<Vec<u8>, EngineError> {
        *self.last.lock().unwrap() = Some(composition.clone());
        Ok(b"%PDF-1.7 stub".to_vec())
    }

    fn name(&self) -> &'static str {
        "StubEngine"
    }
}

/// Render engine that always fails.
#[derive(Debug)]
pub struct FailingEngine;

impl RenderEngine for FailingEngine {
    fn render(&self, _composition: &Composition) -> Result<Vec<u8>, EngineError> {
        Err(EngineError::Encode("encoder exploded".to_string()))
    }

    fn name(&self) -> &'static str {
        "FailingEngine"
    }
}

/// Resource provider wrapper counting `load` calls.
#[derive(Debug, Default)]
pub struct CountingProvider {
    inner: InMemoryResourceProvider,
    loads: AtomicUsize,
}

impl CountingProvider {
    pub fn with_stylesheets(entries: &[(&str, &str)]) -> Self {
        let provider = Self::default();
        for (reference, css) in entries {
            provider
                .inner
                .add(*reference, css.as_bytes().to_vec())
                .expect("fixture stylesheet must store");
        }
        provider
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl ResourceProvider for CountingProvider {
    fn load(&self, reference: &str) -> Result<SharedResourceData, ResourceError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.inner.load(reference)
    }

    fn exists(&self, reference: &str) -> bool {
        self.inner.exists(reference)
    }

    fn name(&self) -> &'static str {
        "CountingProvider"
    }
}

/// A plain report document with a pre-create call counter.
pub struct ReportDocument {
    descriptor: DocumentDescriptor,
    hook_calls: AtomicUsize,
}

impl ReportDocument {
    pub fn new(descriptor: DocumentDescriptor) -> Self {
        ReportDocument {
            descriptor,
            hook_calls: AtomicUsize::new(0),
        }
    }

    pub fn hook_count(&self) -> usize {
        self.hook_calls.load(Ordering::SeqCst)
    }
}

impl DocumentHandler for ReportDocument {
    fn descriptor(&self) -> &DocumentDescriptor {
        &self.descriptor
    }

    fn type_name(&self) -> &'static str {
        "ReportDocument"
    }

    fn pre_create(&self, _request: &RenderRequest) -> Result<(), HookError> {
        self.hook_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// A second document type, for registry identity tests.
pub struct InvoiceDocument {
    descriptor: DocumentDescriptor,
}

impl InvoiceDocument {
    pub fn new(descriptor: DocumentDescriptor) -> Self {
        InvoiceDocument { descriptor }
    }
}

impl DocumentHandler for InvoiceDocument {
    fn descriptor(&self) -> &DocumentDescriptor {
        &self.descriptor
    }

    fn type_name(&self) -> &'static str {
        "InvoiceDocument"
    }
}

/// A document whose pre-create hook always fails.
pub struct QuotaDocument {
    descriptor: DocumentDescriptor,
}

impl QuotaDocument {
    pub fn new(descriptor: DocumentDescriptor) -> Self {
        QuotaDocument { descriptor }
    }
}

impl DocumentHandler for QuotaDocument {
    fn descriptor(&self) -> &DocumentDescriptor {
        &self.descriptor
    }

    fn type_name(&self) -> &'static str {
        "QuotaDocument"
    }

    fn pre_create(&self, _request: &RenderRequest) -> Result<(), HookError> {
        Err("monthly quota exhausted".into())
    }
}

/// A document that extends the context with an account number.
pub struct StatementDocument {
    descriptor: DocumentDescriptor,
}

impl StatementDocument {
    pub fn new(descriptor: DocumentDescriptor) -> Self {
        StatementDocument { descriptor }
    }
}

impl DocumentHandler for StatementDocument {
    fn descriptor(&self) -> &DocumentDescriptor {
        &self.descriptor
    }

    fn type_name(&self) -> &'static str {
        "StatementDocument"
    }

    fn extend_context(&self, _request: &RenderRequest, context: &mut Map<String, Value>) {
        context.insert("account".to_string(), Value::String("AC-1042".to_string()));
    }
}

/// Descriptor for the fixture "report" template.
pub fn report_descriptor() -> DocumentDescriptor {
    DocumentDescriptor::new("report", "report")
}
