//! Core business logic for the explorer.
//!
//! This module provides:
//! - [`Selection`] the bucket/object/view state machine
//! - [`Loadable`] load status with last-request-wins tickets
//! - [`classify`] and [`synthesize`] for extension-based previews
//! - [`RenderSurface`] the sandbox-or-text rendering decision
//! - [`StorageProvider`] and its [`MockProvider`] implementation

mod catalog;
pub mod classify;
pub mod error;
mod loader;
mod provider;
mod render;
mod selection;

pub use catalog::Catalog;
pub use classify::{ContentKind, classify, extension, synthesize};
pub use error::{BrowserError, StorageError, TransitionError};
pub use loader::{LoadState, Loadable, Ticket};
pub use provider::{Latency, MockProvider, StorageProvider};
pub use render::RenderSurface;
pub use selection::Selection;
