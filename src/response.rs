//! Rendered output and the response metadata contract.
//!
//! The pipeline hands ownership of its result to the HTTP adapter
//! immediately; nothing here is cached or retained.

/// Content type for finished documents.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Content type for preview markup.
pub const PREVIEW_CONTENT_TYPE: &str = "text/html";

/// Cookie set alongside every finished document. Client download tooling
/// polls for this cookie to detect that the download has completed; it is a
/// protocol contract, not an implementation detail.
pub const DOWNLOAD_COOKIE: (&str, &str) = ("fileDownload", "true");

/// The result of handling one document request.
#[derive(Debug)]
pub enum RenderedDocument {
    /// Raw rendered markup (preview mode).
    Preview(String),
    /// A finished, downloadable document.
    Document(DocumentPayload),
}

/// A finished document plus the metadata the response needs.
#[derive(Debug, Clone)]
pub struct DocumentPayload {
    pub bytes: Vec<u8>,
    /// Final filename, extension included.
    pub filename: String,
}

impl DocumentPayload {
    pub fn content_type(&self) -> &'static str {
        PDF_CONTENT_TYPE
    }

    /// The attachment disposition header value for this payload.
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}
