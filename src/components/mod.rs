//! UI components built with Leptos.
//!
//! - [`Explorer`] - Browse page (bucket picker + object list)
//! - [`Preview`] - Content preview page
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod explorer;
pub mod icons;
pub mod preview;

pub use explorer::Explorer;
pub use preview::Preview;
