//! Bucket explorer: browse mock object-storage buckets and preview their
//! objects in the browser.
//!
//! - [`app`] - Root component and the [`AppContext`](app::AppContext) controller
//! - [`core`] - Selection state machine, classification, storage provider seam
//! - [`models`] - Domain types
//! - [`components`] - Leptos views
//! - [`utils`] - Browser glue

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;
