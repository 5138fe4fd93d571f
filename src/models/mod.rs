//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`BucketId`] - Normalized bucket identifiers
//! - [`ObjectDescriptor`], [`ObjectCategory`] - Object listing entries
//! - [`ContentArtifact`] - Synthesized preview content
//! - [`ViewState`] - Browse / preview page switch

mod bucket;
mod content;
mod explorer;
mod object;

pub use bucket::BucketId;
pub use content::{ContentArtifact, mime};
pub use explorer::ViewState;
pub use object::{ObjectCategory, ObjectDescriptor};
