//! Full page preview of the selected object.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::PreviewBody;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::NEW_TAB_HTML_MIME;
use crate::core::BrowserError;
use crate::models::ContentArtifact;
use crate::utils::{dom, log};

stylance::import_crate_style!(css, "src/components/preview/page.module.css");

#[component]
pub fn Preview() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let bucket = Signal::derive(move || {
        ctx.selection
            .with(|s| s.bucket().map(|b| b.as_str().to_string()))
            .unwrap_or_default()
    });
    let object = Signal::derive(move || {
        ctx.selection
            .with(|s| s.object().map(String::from))
            .unwrap_or_default()
    });
    let notice = ctx.notice;

    view! {
        <div class=css::page>
            <PreviewHeader bucket=bucket object=object />

            <main class=css::main>
                <Show when=move || notice.get().is_some()>
                    <p class=css::notice role="status">{move || notice.get().unwrap_or_default()}</p>
                </Show>
                <div class=css::card>
                    <PreviewBody bucket=bucket object=object />
                </div>
            </main>
        </div>
    }
}

/// Back button, object title, and open / download actions.
#[component]
fn PreviewHeader(bucket: Signal<String>, object: Signal<String>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let ready = Signal::derive(move || ctx.preview.with(|p| p.is_ready()));

    let handle_back = move |_: leptos::ev::MouseEvent| {
        let _ = ctx.back();
    };

    let run_action = move |action: fn(&ContentArtifact, &str) -> Result<(), BrowserError>| {
        let Some(artifact) = ctx.preview.with_untracked(|p| p.ready().cloned()) else {
            return;
        };
        match action(&artifact, &object.get_untracked()) {
            Ok(()) => ctx.notice.set(None),
            Err(e) => {
                log::warn(&format!("preview action failed: {}", e));
                ctx.notice.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <header class=css::header>
            <div class=css::headerLeft>
                <button class=css::backButton on:click=handle_back>
                    <Icon icon=ic::ARROW_LEFT />
                    <span>"Back to Explorer"</span>
                </button>
                <div>
                    <h1 class=css::objectName>{move || object.get()}</h1>
                    <p class=css::bucketName>{move || format!("from {}", bucket.get())}</p>
                </div>
            </div>
            <div class=css::headerActions>
                <button
                    class=css::actionButton
                    disabled=move || !ready.get()
                    on:click=move |_| run_action(open_artifact)
                    title="Open a copy of this content in a new tab"
                >
                    <Icon icon=ic::EXTERNAL_LINK />
                    <span>"Open in New Tab"</span>
                </button>
                <button
                    class=css::actionButton
                    disabled=move || !ready.get()
                    on:click=move |_| run_action(download_artifact)
                    title="Download this content"
                >
                    <Icon icon=ic::DOWNLOAD />
                    <span>"Download"</span>
                </button>
            </div>
        </header>
    }
}

/// HTML is handed to the new tab as text so it never runs with this origin.
fn open_artifact(artifact: &ContentArtifact, _object: &str) -> Result<(), BrowserError> {
    let mime = if artifact.is_html() {
        NEW_TAB_HTML_MIME
    } else {
        artifact.mime_type.as_str()
    };
    dom::open_in_new_tab(&artifact.body, mime)
}

fn download_artifact(artifact: &ContentArtifact, object: &str) -> Result<(), BrowserError> {
    dom::download(&artifact.body, &artifact.mime_type, object)
}
