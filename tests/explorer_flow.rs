//! End-to-end browse → preview flows against the mock provider.
//!
//! These drive the same sequence the UI does (select, list, confirm,
//! fetch, back) without a DOM.

use std::sync::Arc;

use bucket_explorer::core::{
    LoadState, Loadable, MockProvider, RenderSurface, Selection, StorageProvider, TransitionError,
};
use bucket_explorer::models::{ObjectCategory, ObjectDescriptor, ViewState};

fn provider() -> Arc<dyn StorageProvider> {
    Arc::new(MockProvider::default())
}

#[tokio::test]
async fn static_website_listing_and_html_preview() {
    let provider = provider();
    let mut selection = Selection::new();
    let mut listing = Loadable::new();

    selection.select_bucket("my-static-website").unwrap();
    let bucket = selection.bucket().cloned().unwrap();
    let ticket = listing.begin();
    listing.resolve(ticket, provider.list_objects(&bucket).await);

    let objects = listing.ready().unwrap();
    assert_eq!(objects.len(), 5);
    assert_eq!(
        objects[0],
        ObjectDescriptor::new("index.html", ObjectCategory::Html, "12.5 KB", "2024-01-15")
    );

    selection.select_object(&objects[0].name).unwrap();
    selection.confirm_preview().unwrap();
    assert_eq!(selection.view(), ViewState::Previewing);

    let (bucket, object) = selection.preview_target().unwrap();
    let artifact = provider.fetch_object_content(bucket, object).await.unwrap();
    assert_eq!(artifact.mime_type, "text/html");
    assert!(matches!(
        RenderSurface::for_artifact(&artifact),
        RenderSurface::SandboxedFrame { .. }
    ));
}

#[tokio::test]
async fn png_previews_as_plain_text() {
    let provider = provider();
    let mut selection = Selection::new();
    selection.select_bucket("my-static-website").unwrap();
    selection.select_object("logo.png").unwrap();
    selection.confirm_preview().unwrap();

    let (bucket, object) = selection.preview_target().unwrap();
    let artifact = provider.fetch_object_content(bucket, object).await.unwrap();
    assert_eq!(artifact.mime_type, "text/plain");
    assert!(matches!(
        RenderSurface::for_artifact(&artifact),
        RenderSurface::TextBlock { .. }
    ));
}

#[tokio::test]
async fn back_then_confirm_reproduces_artifact() {
    let provider = provider();
    let mut selection = Selection::new();
    selection.select_bucket("company-assets").unwrap();
    selection.select_object("app.js").unwrap();

    selection.confirm_preview().unwrap();
    let (bucket, object) = selection.preview_target().unwrap();
    let first = provider.fetch_object_content(bucket, object).await.unwrap();

    selection.back().unwrap();
    selection.confirm_preview().unwrap();
    let (bucket, object) = selection.preview_target().unwrap();
    let second = provider.fetch_object_content(bucket, object).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn custom_bucket_lists_empty() {
    let provider = provider();
    let mut selection = Selection::new();

    assert_eq!(
        selection.select_bucket("   "),
        Err(TransitionError::BlankBucket)
    );
    assert_eq!(selection, Selection::new());

    selection.select_bucket("  my-own-bucket  ").unwrap();
    let bucket = selection.bucket().cloned().unwrap();
    assert_eq!(bucket.as_str(), "my-own-bucket");
    assert!(provider.list_objects(&bucket).await.unwrap().is_empty());
}

#[tokio::test]
async fn late_listing_does_not_overwrite_newer_bucket() {
    let provider = provider();
    let mut selection = Selection::new();
    let mut listing = Loadable::new();

    selection.select_bucket("company-assets").unwrap();
    let first_bucket = selection.bucket().cloned().unwrap();
    let first = listing.begin();

    selection.select_bucket("demo-content").unwrap();
    let second_bucket = selection.bucket().cloned().unwrap();
    let second = listing.begin();

    // The newer request finishes first, the older one arrives late.
    assert!(listing.resolve(second, provider.list_objects(&second_bucket).await));
    assert!(!listing.resolve(first, provider.list_objects(&first_bucket).await));

    let names: Vec<String> = listing
        .ready()
        .unwrap()
        .iter()
        .map(|o| o.name.clone())
        .collect();
    assert_eq!(names, ["demo.html", "demo.css"]);
}

#[tokio::test]
async fn leaving_preview_discards_pending_content() {
    let provider = provider();
    let mut selection = Selection::new();
    let mut preview = Loadable::new();

    selection.select_bucket("public-files").unwrap();
    selection.select_object("home.html").unwrap();
    selection.confirm_preview().unwrap();
    let ticket = preview.begin();

    selection.back().unwrap();
    preview.reset();

    let bucket = selection.bucket().cloned().unwrap();
    let late = provider.fetch_object_content(&bucket, "home.html").await;
    assert!(!preview.resolve(ticket, late));
    assert_eq!(preview.state(), &LoadState::Idle);
}
