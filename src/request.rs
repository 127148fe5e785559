//! Per-request input consumed from the HTTP boundary.

use url::Url;

/// The requesting principal's authentication state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Principal {
    Anonymous,
    Authenticated { username: String },
}

impl Principal {
    pub fn authenticated(username: impl Into<String>) -> Self {
        Principal::Authenticated {
            username: username.into(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Principal::Authenticated { .. })
    }
}

/// One document request.
///
/// The HTTP adapter builds this from the incoming request: the principal from
/// the session, the preview flag from the query string, and the absolute base
/// URL from the request URI. Lives for exactly one request.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    principal: Principal,
    preview: bool,
    base_url: Option<Url>,
}

impl RenderRequest {
    pub fn new(principal: Principal) -> Self {
        RenderRequest {
            principal,
            preview: false,
            base_url: None,
        }
    }

    pub fn anonymous() -> Self {
        Self::new(Principal::Anonymous)
    }

    /// Request raw rendered markup instead of an encoded document.
    pub fn with_preview(mut self, preview: bool) -> Self {
        self.preview = preview;
        self
    }

    /// Absolute URL that relative references inside the markup resolve
    /// against during composition.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    pub fn preview(&self) -> bool {
        self.preview
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn principal_authentication_state() {
        assert!(!Principal::Anonymous.is_authenticated());
        assert!(Principal::authenticated("ada").is_authenticated());
    }

    #[test]
    fn request_defaults() {
        let request = RenderRequest::anonymous();
        assert!(!request.preview());
        assert!(request.base_url().is_none());
    }
}
