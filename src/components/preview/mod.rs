//! Object preview page.
//!
//! - [`Preview`] - Page with header actions and the preview card
//! - [`PreviewBody`] - Loading state plus sandboxed / text rendering

mod content;
mod page;

pub use content::PreviewBody;
pub use page::Preview;
