//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use gloo_timers::callback::Timeout;
use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, Url, Window};

use crate::core::BrowserError;

/// Object URLs stay valid this long after being handed to the browser.
const REVOKE_DELAY_MS: u32 = 60_000;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Wrap `body` in a Blob of type `mime` and return an object URL for it.
pub fn object_url(body: &str, mime: &str) -> Result<String, BrowserError> {
    let parts = Array::new();
    parts.push(&JsValue::from_str(body));

    let options = BlobPropertyBag::new();
    options.set_type(mime);

    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| BrowserError::BlobFailed(js_message(&e)))?;
    Url::create_object_url_with_blob(&blob).map_err(|e| BrowserError::BlobFailed(js_message(&e)))
}

/// Open `body` in a new tab as a `mime` Blob.
pub fn open_in_new_tab(body: &str, mime: &str) -> Result<(), BrowserError> {
    let window = window().ok_or(BrowserError::NoWindow)?;
    let url = object_url(body, mime)?;

    // `noopener` makes window.open return null even on success, so only a
    // thrown error counts as blocked.
    let opened = window.open_with_url_and_target_and_features(&url, "_blank", "noopener");
    revoke_later(url);
    opened.map(|_| ()).map_err(|_| BrowserError::PopupBlocked)
}

/// Save `body` as a file named `filename`.
pub fn download(body: &str, mime: &str, filename: &str) -> Result<(), BrowserError> {
    let document = document().ok_or(BrowserError::NoWindow)?;
    let url = object_url(body, mime)?;

    let anchor = document
        .create_element("a")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok())
        .ok_or_else(|| BrowserError::BlobFailed("could not create link".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    revoke_later(url);
    Ok(())
}

fn revoke_later(url: String) {
    Timeout::new(REVOKE_DELAY_MS, move || {
        let _ = Url::revoke_object_url(&url);
    })
    .forget();
}

fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
