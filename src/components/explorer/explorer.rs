//! Main explorer page.
//!
//! ## Layout
//!
//! - **Desktop (> 1024px)**: bucket picker on the left, object list on the right
//! - **Smaller screens**: the two panels stack
//!
//! The "Display Content" button stays disabled until both a bucket and an
//! object are selected.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::{BucketPicker, ObjectList};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, APP_TAGLINE};

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// Browse page: pick a bucket, pick an object, open the preview.
#[component]
pub fn Explorer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let can_preview = Signal::derive(move || ctx.selection.with(|s| s.can_preview()));
    let notice = ctx.notice;

    let handle_display = move |_: leptos::ev::MouseEvent| {
        let _ = ctx.confirm_preview();
    };

    view! {
        <div class=css::page>
            <header class=css::header>
                <div class=css::brand>
                    <span class=css::brandIcon aria-hidden="true"><Icon icon=ic::EXPLORER /></span>
                    <h1 class=css::title>{APP_NAME}</h1>
                </div>
                <p class=css::tagline>{APP_TAGLINE}</p>
            </header>

            <main class=css::main>
                <div class=css::panels>
                    <section class=css::panel aria-label="Buckets">
                        <h2 class=css::panelTitle>"Select Bucket"</h2>
                        <BucketPicker />
                    </section>
                    <section class=css::panel aria-label="Objects">
                        <h2 class=css::panelTitle>"Select Object"</h2>
                        <ObjectList />
                    </section>
                </div>

                <Show when=move || notice.get().is_some()>
                    <p class=css::notice role="status">{move || notice.get().unwrap_or_default()}</p>
                </Show>

                <div class=css::actions>
                    <button
                        class=css::displayButton
                        disabled=move || !can_preview.get()
                        on:click=handle_display
                    >
                        <Icon icon=ic::DISPLAY />
                        <span>"Display Content"</span>
                    </button>
                </div>
            </main>
        </div>
    }
}
