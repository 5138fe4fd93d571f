//! Content classification and placeholder synthesis.
//!
//! Objects are classified purely by file extension (text after the last
//! `.`, compared case-insensitively). Only `html`, `css` and `js` have
//! dedicated templates; everything else, images included, falls through
//! to `text/plain`.

use crate::config::templates;
use crate::models::{ContentArtifact, mime};

/// Preview template family selected by extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentKind {
    Html,
    Stylesheet,
    Script,
    Plain,
}

impl ContentKind {
    /// Classify an object name.
    pub fn from_name(name: &str) -> Self {
        match extension(name).as_deref() {
            Some("html") => Self::Html,
            Some("css") => Self::Stylesheet,
            Some("js") => Self::Script,
            _ => Self::Plain,
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Html => mime::TEXT_HTML,
            Self::Stylesheet => mime::TEXT_CSS,
            Self::Script => mime::APPLICATION_JAVASCRIPT,
            Self::Plain => mime::TEXT_PLAIN,
        }
    }

    /// Template text without the asset file's trailing newline.
    fn template(self) -> &'static str {
        let text = match self {
            Self::Html => templates::HTML,
            Self::Stylesheet => templates::CSS,
            Self::Script => templates::JS,
            Self::Plain => templates::PLAIN,
        };
        text.trim_end_matches(['\r', '\n'])
    }
}

/// Lowercased extension after the final `.`, or `None` if there is no dot.
pub fn extension(name: &str) -> Option<String> {
    name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase())
}

/// Mime type for an object name.
pub fn classify(name: &str) -> &'static str {
    ContentKind::from_name(name).mime_type()
}

/// Build the placeholder artifact for `object` in `bucket`.
///
/// Total: any two strings produce an artifact. Values placed into the
/// HTML template are escaped.
pub fn synthesize(bucket: &str, object: &str) -> ContentArtifact {
    let kind = ContentKind::from_name(object);
    let mime_type = kind.mime_type();

    let body = if kind == ContentKind::Html {
        let bucket = escape_html(bucket);
        let object = escape_html(object);
        fill(
            kind.template(),
            &[("bucket", &bucket), ("object", &object), ("mime", mime_type)],
        )
    } else {
        fill(
            kind.template(),
            &[("bucket", bucket), ("object", object), ("mime", mime_type)],
        )
    };

    ContentArtifact::new(mime_type, body)
}

/// Replace `{{key}}` placeholders in a single pass.
///
/// Substituted values are never rescanned, so a name containing
/// `{{bucket}}` stays literal. Unknown keys are left as written.
fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let key = &after[..end];
                match vars.iter().find(|(k, _)| *k == key) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push_str("{{");
                        out.push_str(key);
                        out.push_str("}}");
                    }
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension() {
        assert_eq!(extension("index.html"), Some("html".to_string()));
        assert_eq!(extension("archive.tar.GZ"), Some("gz".to_string()));
        assert_eq!(extension("README"), None);
        assert_eq!(extension("trailing."), Some(String::new()));
        assert_eq!(extension(".html"), Some("html".to_string()));
    }

    #[test]
    fn test_classify_known_extensions() {
        assert_eq!(classify("index.html"), "text/html");
        assert_eq!(classify("INDEX.HTML"), "text/html");
        assert_eq!(classify("styles.css"), "text/css");
        assert_eq!(classify("Main.Css"), "text/css");
        assert_eq!(classify("script.js"), "application/javascript");
        assert_eq!(classify("APP.JS"), "application/javascript");
    }

    #[test]
    fn test_classify_fallback() {
        assert_eq!(classify("notes.txt"), "text/plain");
        assert_eq!(classify("page.htm"), "text/plain");
        assert_eq!(classify("index.html.bak"), "text/plain");
        assert_eq!(classify("Makefile"), "text/plain");
        assert_eq!(classify(""), "text/plain");
    }

    #[test]
    fn test_images_fall_through_to_plain_text() {
        assert_eq!(classify("logo.png"), "text/plain");
        assert_eq!(classify("banner.jpg"), "text/plain");
    }

    #[test]
    fn test_synthesize_html() {
        let art = synthesize("my-static-website", "index.html");
        assert_eq!(art.mime_type, "text/html");
        assert!(art.is_html());
        assert!(art.body.starts_with("<!DOCTYPE html>"));
        assert!(art.body.contains("Welcome to index.html"));
        assert!(art.body.contains("\"my-static-website\""));
    }

    #[test]
    fn test_synthesize_html_escapes_names() {
        let art = synthesize("<b>", "x\"&.html");
        assert!(art.body.contains("&lt;b&gt;"));
        assert!(art.body.contains("x&quot;&amp;.html"));
        assert!(!art.body.contains("<b>"));
    }

    #[test]
    fn test_synthesize_css_and_js() {
        let css = synthesize("company-assets", "main.css");
        assert_eq!(css.mime_type, "text/css");
        assert!(css.body.starts_with("/* Styles for main.css */"));

        let js = synthesize("company-assets", "app.js");
        assert_eq!(js.mime_type, "application/javascript");
        assert!(js.body.contains("// JavaScript file: app.js"));
        assert!(js.body.contains("// From bucket: company-assets"));
        assert!(js.body.contains("company-assets/app.js"));
    }

    #[test]
    fn test_synthesize_plain_names_mime() {
        let art = synthesize("my-static-website", "logo.png");
        assert_eq!(art.mime_type, "text/plain");
        assert!(art.body.starts_with("Content of logo.png from bucket my-static-website"));
        assert!(art.body.contains("Content-Type: text/plain"));
    }

    #[test]
    fn test_synthesize_is_deterministic() {
        assert_eq!(
            synthesize("demo-content", "demo.html"),
            synthesize("demo-content", "demo.html")
        );
    }

    #[test]
    fn test_synthesize_total_on_odd_input() {
        let art = synthesize("", "");
        assert_eq!(art.mime_type, "text/plain");
        assert!(!art.body.contains("{{"));
    }

    #[test]
    fn test_synthesized_bodies_have_no_trailing_newline() {
        for name in ["x.html", "x.css", "x.js", "x.txt"] {
            let body = synthesize("b", name).body;
            assert!(!body.ends_with('\n'), "{} body ends with a newline", name);
        }
    }

    #[test]
    fn test_fill_single_pass() {
        let out = fill(
            "{{a}}-{{b}}-{{c}}",
            &[("a", "{{b}}"), ("b", "2")],
        );
        assert_eq!(out, "{{b}}-2-{{c}}");
    }

    #[test]
    fn test_fill_unterminated() {
        assert_eq!(fill("x {{a", &[("a", "1")]), "x {{a");
    }
}
