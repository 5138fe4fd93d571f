//! Root application module.
//!
//! Contains the main App component, the AppContext controller, and
//! application-level setup logic following Leptos conventions.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Explorer, Preview};
use crate::core::{
    Latency, Loadable, MockProvider, Selection, StorageProvider, TransitionError,
};
use crate::models::{BucketId, ContentArtifact, ObjectDescriptor};
use crate::utils::log;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read by child components
/// with `use_context::<AppContext>()`. It is the only place selection state
/// lives; children get read-only signals and call the transition methods
/// below instead of writing state themselves.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals or stored
/// values, which are cheap handles to the underlying reactive state.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bucket, object and current view.
    pub selection: RwSignal<Selection>,
    /// Preset bucket names from the provider.
    pub buckets: RwSignal<Loadable<Vec<BucketId>>>,
    /// Listing of the selected bucket.
    pub listing: RwSignal<Loadable<Vec<ObjectDescriptor>>>,
    /// Content of the object being previewed.
    pub preview: RwSignal<Loadable<ContentArtifact>>,
    /// Last rejected action, shown inline until the next successful one.
    pub notice: RwSignal<Option<String>>,
    provider: StoredValue<Arc<dyn StorageProvider>>,
}

impl AppContext {
    /// Creates a context browsing nothing, backed by `provider`.
    pub fn new(provider: Arc<dyn StorageProvider>) -> Self {
        Self {
            selection: RwSignal::new(Selection::new()),
            buckets: RwSignal::new(Loadable::new()),
            listing: RwSignal::new(Loadable::new()),
            preview: RwSignal::new(Loadable::new()),
            notice: RwSignal::new(None),
            provider: StoredValue::new(provider),
        }
    }

    /// Fetch the preset bucket list.
    pub fn load_buckets(&self) {
        let Some(ticket) = self.buckets.try_update(|b| b.begin()) else {
            return;
        };
        let provider = self.provider.get_value();
        let buckets = self.buckets;

        spawn_local(async move {
            let result = provider.list_buckets().await;
            if let Err(e) = &result {
                log::warn(&format!("listing buckets failed: {}", e));
            }
            let _ = buckets.try_update(|b| b.resolve(ticket, result));
        });
    }

    /// Select a preset or typed bucket name.
    ///
    /// Reloads the listing when the bucket changed or the previous listing
    /// did not succeed.
    pub fn select_bucket(&self, candidate: &str) -> Result<(), TransitionError> {
        let mut next = self.selection.get_untracked();
        let changed = self.apply(next.select_bucket(candidate))?;

        let bucket = next.bucket().cloned();
        self.selection.set(next);

        let listing_ok = self.listing.with_untracked(|l| l.is_ready() || l.is_loading());
        if let Some(bucket) = bucket
            && (changed || !listing_ok)
        {
            log::info(&format!("selected bucket {}", bucket));
            self.refresh_listing(bucket);
        }
        Ok(())
    }

    /// Select an object in the current bucket.
    pub fn select_object(&self, name: &str) -> Result<(), TransitionError> {
        let mut next = self.selection.get_untracked();
        self.apply(next.select_object(name))?;
        self.selection.set(next);
        Ok(())
    }

    /// Switch to the preview page and start loading its content.
    pub fn confirm_preview(&self) -> Result<(), TransitionError> {
        let mut next = self.selection.get_untracked();
        self.apply(next.confirm_preview())?;

        let target = next
            .preview_target()
            .map(|(bucket, object)| (bucket.clone(), object.to_string()));
        self.selection.set(next);

        if let Some((bucket, object)) = target {
            self.load_preview(bucket, object);
        }
        Ok(())
    }

    /// Return to browsing. Selections are kept; a pending preview load is
    /// discarded.
    pub fn back(&self) -> Result<(), TransitionError> {
        let mut next = self.selection.get_untracked();
        self.apply(next.back())?;
        self.selection.set(next);
        self.preview.update(|p| p.reset());
        Ok(())
    }

    /// Record the outcome of a transition in `notice`.
    fn apply<T>(&self, result: Result<T, TransitionError>) -> Result<T, TransitionError> {
        match &result {
            Ok(_) => self.notice.set(None),
            Err(e) => {
                log::warn(&format!("rejected: {}", e));
                self.notice.set(Some(e.to_string()));
            }
        }
        result
    }

    fn refresh_listing(&self, bucket: BucketId) {
        let ticket = self.listing.try_update(|l| l.begin());
        let Some(ticket) = ticket else {
            return;
        };
        let provider = self.provider.get_value();
        let listing = self.listing;

        spawn_local(async move {
            let result = provider.list_objects(&bucket).await;
            if let Err(e) = &result {
                log::warn(&format!("listing {} failed: {}", bucket, e));
            }
            // A newer bucket selection wins; late results are dropped here.
            let applied = listing.try_update(|l| l.resolve(ticket, result));
            if applied == Some(false) {
                log::info(&format!("dropped stale listing for {}", bucket));
            }
        });
    }

    fn load_preview(&self, bucket: BucketId, object: String) {
        let Some(ticket) = self.preview.try_update(|p| p.begin()) else {
            return;
        };
        let provider = self.provider.get_value();
        let preview = self.preview;

        spawn_local(async move {
            let result = provider.fetch_object_content(&bucket, &object).await;
            if let Err(e) = &result {
                log::warn(&format!("loading {}/{} failed: {}", bucket, object, e));
            }
            let _ = preview.try_update(|p| p.resolve(ticket, result));
        });
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext backed by the mock provider
/// - Starts loading the preset bucket list
/// - Switches between the explorer and preview pages
#[component]
pub fn App() -> impl IntoView {
    let provider: Arc<dyn StorageProvider> =
        Arc::new(MockProvider::default().with_latency(Latency::simulated()));
    let ctx = AppContext::new(provider);
    provide_context(ctx);
    ctx.load_buckets();

    let previewing = Signal::derive(move || ctx.selection.with(|s| s.view().is_previewing()));

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #dc2626; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <p style="color: #64748b; margin-bottom: 2rem;">
                        "An unexpected error occurred. Please try reloading the page."
                    </p>
                    <ul style="color: #dc2626; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Show when=move || previewing.get() fallback=|| view! { <Explorer /> }>
                <Preview />
            </Show>
        </ErrorBoundary>
    }
}
