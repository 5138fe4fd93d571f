//! Synthesized preview content.

/// Mime types produced by the classifier.
pub mod mime {
    pub const TEXT_HTML: &str = "text/html";
    pub const TEXT_CSS: &str = "text/css";
    pub const APPLICATION_JAVASCRIPT: &str = "application/javascript";
    pub const TEXT_PLAIN: &str = "text/plain";
}

/// Resolved mime type and body for an object preview.
///
/// Derived on demand, never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentArtifact {
    pub mime_type: String,
    pub body: String,
}

impl ContentArtifact {
    pub fn new(mime_type: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            body: body.into(),
        }
    }

    /// Whether the body is an HTML document (must go through the sandbox).
    pub fn is_html(&self) -> bool {
        self.mime_type == mime::TEXT_HTML
    }
}
