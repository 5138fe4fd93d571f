//! Bucket picker panel.
//!
//! Lists the provider's preset buckets and lets the user type any other
//! bucket name. Both paths end in [`AppContext::select_bucket`].

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::LoadState;
use crate::models::BucketId;
use crate::utils::format::aria_flag;

stylance::import_crate_style!(css, "src/components/explorer/bucket_picker.module.css");

#[component]
pub fn BucketPicker() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let selected = Signal::derive(move || {
        ctx.selection
            .with(|s| s.bucket().map(|b| b.as_str().to_string()))
    });

    view! {
        <div class=css::picker>
            <section class=css::group>
                <h3 class=css::groupTitle>"Available Buckets"</h3>
                {move || match ctx.buckets.with(|b| b.state().clone()) {
                    LoadState::Idle | LoadState::Loading => view! {
                        <div class=css::loading>
                            <span class=css::spinner><Icon icon=ic::LOADING /></span>
                            <span>"Loading buckets..."</span>
                        </div>
                    }
                    .into_any(),
                    LoadState::Ready(buckets) => view! {
                        <ul class=css::presets role="listbox" aria-label="Available buckets">
                            {buckets
                                .into_iter()
                                .map(|bucket| view! { <PresetItem bucket=bucket selected=selected /> })
                                .collect_view()}
                        </ul>
                    }
                    .into_any(),
                    LoadState::Failed(message) => view! {
                        <p class=css::error>{message}</p>
                    }
                    .into_any(),
                }}
            </section>

            <section class=css::group>
                <h3 class=css::groupTitle>"Custom Bucket"</h3>
                <CustomBucketInput />
            </section>

            <Show when=move || selected.get().is_some()>
                <div class=css::current>
                    <p class=css::currentLabel>"Selected Bucket:"</p>
                    <p class=css::currentValue>{move || selected.get().unwrap_or_default()}</p>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn PresetItem(bucket: BucketId, selected: Signal<Option<String>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let name = bucket.as_str().to_string();
    let name_for_select = name.clone();
    let is_selected = Signal::derive(move || selected.get().as_deref() == Some(name_for_select.as_str()));

    let item_class = move || {
        if is_selected.get() {
            format!("{} {}", css::preset, css::selected)
        } else {
            css::preset.to_string()
        }
    };

    let name_for_click = name.clone();
    let handle_click = move |_: leptos::ev::MouseEvent| {
        let _ = ctx.select_bucket(&name_for_click);
    };

    view! {
        <li>
            <button
                class=item_class
                on:click=handle_click
                role="option"
                aria-selected=move || aria_flag(is_selected.get())
            >
                <span class=css::presetIcon aria-hidden="true"><Icon icon=ic::BUCKET /></span>
                <span class=css::presetName>{name}</span>
            </button>
        </li>
    }
}

/// "Add Custom Bucket" toggle with text entry.
///
/// Submit stays disabled while the text is blank; Enter submits, Cancel
/// clears and closes.
#[component]
fn CustomBucketInput() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let (open, set_open) = signal(false);
    let (text, set_text) = signal(String::new());

    let can_submit = Signal::derive(move || text.with(|t| BucketId::parse(t).is_some()));

    let close = move || {
        set_text.set(String::new());
        set_open.set(false);
    };

    let submit = move || {
        if !can_submit.get_untracked() {
            return;
        }
        if ctx.select_bucket(&text.get_untracked()).is_ok() {
            close();
        }
    };

    view! {
        <Show
            when=move || open.get()
            fallback=move || view! {
                <button class=css::addButton on:click=move |_| set_open.set(true)>
                    <Icon icon=ic::PLUS />
                    <span>"Add Custom Bucket"</span>
                </button>
            }
        >
            <div class=css::customRow>
                <input
                    class=css::customInput
                    type="text"
                    placeholder="Enter bucket name"
                    aria-label="Bucket name"
                    prop:value=move || text.get()
                    on:input=move |ev| set_text.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            submit();
                        }
                    }
                />
                <button
                    class=css::submitButton
                    disabled=move || !can_submit.get()
                    on:click=move |_| submit()
                >
                    "Add"
                </button>
                <button class=css::cancelButton on:click=move |_| close()>
                    "Cancel"
                </button>
            </div>
        </Show>
    }
}
