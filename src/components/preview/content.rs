//! Preview body: loading state and content surface.
//!
//! HTML artifacts render inside a sandboxed `<iframe srcdoc>`; every other
//! artifact renders as verbatim text. The decision itself lives in
//! [`RenderSurface`] so it can be tested without a DOM.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::PREVIEW_SANDBOX;
use crate::core::{LoadState, RenderSurface};
use crate::models::ContentArtifact;
use crate::utils::format::object_path;

stylance::import_crate_style!(css, "src/components/preview/content.module.css");

/// Loading indicator, error, or the rendered artifact.
#[component]
pub fn PreviewBody(bucket: Signal<String>, object: Signal<String>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    move || match ctx.preview.with(|p| p.state().clone()) {
        LoadState::Idle | LoadState::Loading => view! {
            <div class=css::loading>
                <span class=css::spinner><Icon icon=ic::LOADING /></span>
                <p>
                    {format!(
                        "Loading content from {}...",
                        object_path(&bucket.get_untracked(), &object.get_untracked()),
                    )}
                </p>
            </div>
        }
        .into_any(),
        LoadState::Failed(message) => view! {
            <p class=css::error>{message}</p>
        }
        .into_any(),
        LoadState::Ready(artifact) => view! {
            <div class=css::bodyHeader>
                <h2 class=css::bodyTitle>"Content Preview"</h2>
                <span class=css::mime>{artifact.mime_type.clone()}</span>
            </div>
            <ContentSurface artifact=artifact title=format!("Preview of {}", object.get_untracked()) />
        }
        .into_any(),
    }
}

#[component]
fn ContentSurface(artifact: ContentArtifact, title: String) -> impl IntoView {
    match RenderSurface::for_artifact(&artifact) {
        RenderSurface::SandboxedFrame { document } => view! {
            <iframe
                class=css::frame
                sandbox=PREVIEW_SANDBOX
                referrerpolicy="no-referrer"
                srcdoc=document
                title=title
            ></iframe>
        }
        .into_any(),
        RenderSurface::TextBlock { text } => view! {
            <pre class=css::text><code>{text}</code></pre>
        }
        .into_any(),
    }
}
