//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Text assets are loaded at compile time using `include_str!`.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header.
pub const APP_NAME: &str = "Bucket Explorer";

/// Subtitle displayed under the application name.
pub const APP_TAGLINE: &str = "Browse and display static files from object storage buckets";

// =============================================================================
// Preview Templates (loaded at compile time)
// =============================================================================

/// Placeholder bodies for synthesized previews.
///
/// Placeholders: `{{object}}`, `{{bucket}}`, `{{mime}}`.
pub mod templates {
    pub const HTML: &str = include_str!("../assets/templates/page.html");
    pub const CSS: &str = include_str!("../assets/templates/stylesheet.css");
    pub const JS: &str = include_str!("../assets/templates/script.js");
    pub const PLAIN: &str = include_str!("../assets/templates/plain.txt");
}

// =============================================================================
// Simulated Latency
// =============================================================================

/// Mock provider delays (milliseconds).
pub mod latency {
    /// Delay before the preset bucket list resolves.
    pub const BUCKETS_MS: u32 = 500;
    /// Delay before an object listing resolves.
    pub const LISTING_MS: u32 = 800;
    /// Delay before preview content resolves.
    pub const CONTENT_MS: u32 = 1000;
}

// =============================================================================
// Preview Configuration
// =============================================================================

/// `sandbox` attribute for the HTML preview frame.
///
/// Empty grants nothing: no scripts, forms, popups or same-origin access.
pub const PREVIEW_SANDBOX: &str = "";

/// Mime type used when opening HTML previews in a new tab.
///
/// Served as text so the document never runs with this origin.
pub const NEW_TAB_HTML_MIME: &str = "text/plain;charset=utf-8";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder
/// - `Lucide` - Minimal, thin strokes (default)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    Bootstrap,
    #[default]
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
