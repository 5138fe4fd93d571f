//! Utility modules for browser and display concerns.
//!
//! Provides:
//! - [`dom`] - Window access, Blob URLs, open-in-tab and download helpers
//! - [`format`] - Display labels
//! - [`log`] - Console logging (silent on native builds)
//! - [`time`] - Async sleep on the browser event loop

pub mod dom;
pub mod format;
pub mod log;
pub mod time;
