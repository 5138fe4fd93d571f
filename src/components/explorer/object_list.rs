//! Object listing panel.
//!
//! Shows the selected bucket's objects with size and modification labels.
//! Clicking an object selects it; previewing is a separate step.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::LoadState;
use crate::models::{ObjectCategory, ObjectDescriptor};
use crate::utils::format::{aria_flag, count_label};

stylance::import_crate_style!(css, "src/components/explorer/object_list.module.css");

#[component]
pub fn ObjectList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let bucket = Signal::derive(move || {
        ctx.selection
            .with(|s| s.bucket().map(|b| b.as_str().to_string()))
    });
    let selected = Signal::derive(move || ctx.selection.with(|s| s.object().map(String::from)));

    let listing = move || {
        let Some(bucket) = bucket.get() else {
            return view! {
                <Placeholder message="Select a bucket to view objects" />
            }
            .into_any();
        };

        match ctx.listing.with(|l| l.state().clone()) {
            LoadState::Idle | LoadState::Loading => view! {
                <div class=css::loading>
                    <span class=css::spinner><Icon icon=ic::LOADING /></span>
                    <p>{format!("Loading objects from {}...", bucket)}</p>
                </div>
            }
            .into_any(),
            LoadState::Failed(message) => view! {
                <p class=css::error>{message}</p>
            }
            .into_any(),
            LoadState::Ready(objects) if objects.is_empty() => view! {
                <Placeholder message=format!("No objects found in bucket \"{}\"", bucket) />
            }
            .into_any(),
            LoadState::Ready(objects) => view! {
                <p class=css::summary>
                    {format!("{} in {}", count_label(objects.len(), "object"), bucket)}
                </p>
                <ul class=css::list role="listbox" aria-label="Objects">
                    {objects
                        .into_iter()
                        .map(|object| view! { <ObjectItem object=object selected=selected /> })
                        .collect_view()}
                </ul>
            }
            .into_any(),
        }
    };

    view! {
        <div class=css::objects>
            {listing}
            <Show when=move || selected.get().is_some()>
                <div class=css::current>
                    <p class=css::currentLabel>"Selected Object:"</p>
                    <p class=css::currentValue>{move || selected.get().unwrap_or_default()}</p>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn Placeholder(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class=css::placeholder>
            <span class=css::placeholderIcon aria-hidden="true"><Icon icon=ic::FILE /></span>
            <p>{message}</p>
        </div>
    }
}

#[component]
fn ObjectItem(object: ObjectDescriptor, selected: Signal<Option<String>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let icon = ic::for_category(object.category);
    let meta = format!("{} • {}", object.size_label, object.modified_label);
    let category_class = format!("{} {}", css::icon, category_css(&object));

    let name_for_select = object.name.clone();
    let is_selected =
        Signal::derive(move || selected.get().as_deref() == Some(name_for_select.as_str()));

    let name_for_click = object.name.clone();
    let handle_click = move |_: leptos::ev::MouseEvent| {
        let _ = ctx.select_object(&name_for_click);
    };

    let item_class = move || {
        if is_selected.get() {
            format!("{} {}", css::item, css::selected)
        } else {
            css::item.to_string()
        }
    };

    view! {
        <li>
            <button
                class=item_class
                on:click=handle_click
                role="option"
                data-category=object.category.label()
                aria-selected=move || aria_flag(is_selected.get())
            >
                <span class=category_class aria-hidden="true"><Icon icon=icon /></span>
                <span class=css::text>
                    <span class=css::name>{object.name.clone()}</span>
                    <span class=css::meta>{meta}</span>
                </span>
            </button>
        </li>
    }
}

fn category_css(object: &ObjectDescriptor) -> &'static str {
    match object.category {
        ObjectCategory::Html => css::catHtml,
        ObjectCategory::Css => css::catCss,
        ObjectCategory::Js => css::catJs,
        ObjectCategory::Image => css::catImage,
        ObjectCategory::Other => css::catOther,
    }
}
