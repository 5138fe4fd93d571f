//! Rendering decision for preview content.
//!
//! Object content is untrusted. HTML is only ever shown inside a sandboxed
//! frame with every capability withheld; everything else is shown as
//! verbatim text.

use crate::models::ContentArtifact;

/// How the previewer must display an artifact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderSurface {
    /// `<iframe sandbox srcdoc=...>`
    SandboxedFrame { document: String },
    /// Monospaced `<pre>` block
    TextBlock { text: String },
}

impl RenderSurface {
    pub fn for_artifact(artifact: &ContentArtifact) -> Self {
        if artifact.is_html() {
            Self::SandboxedFrame {
                document: artifact.body.clone(),
            }
        } else {
            Self::TextBlock {
                text: artifact.body.clone(),
            }
        }
    }
}
