//! Bucket explorer UI components.
//!
//! Components:
//! - [`Explorer`] - Browse page with both panels and the display button
//! - [`BucketPicker`] - Preset buckets plus free-text bucket entry
//! - [`ObjectList`] - Objects of the selected bucket

mod bucket_picker;
#[allow(clippy::module_inception)]
mod explorer;
mod object_list;

pub use bucket_picker::BucketPicker;
pub use explorer::Explorer;
pub use object_list::ObjectList;
