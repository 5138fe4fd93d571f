//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::ObjectCategory;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowLeft as ArrowLeft, LuCode as Code, LuDatabase as Bucket, LuDownload as Download,
        LuExternalLink as ExternalLink, LuEye as Display, LuFile as File, LuFileText as FileText,
        LuFolderOpen as Explorer, LuImage as FileImage, LuLoader as Loading, LuPlus as Plus,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowLeft as ArrowLeft, BsArrowRepeat as Loading, BsBoxArrowUpRight as ExternalLink,
        BsCodeSlash as Code, BsDatabase as Bucket, BsDownload as Download, BsEye as Display,
        BsFileEarmark as File, BsFileEarmarkImage as FileImage, BsFileEarmarkText as FileText,
        BsFolder2Open as Explorer, BsPlusLg as Plus,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(ARROW_LEFT, ArrowLeft);
themed_icon!(BUCKET, Bucket);
themed_icon!(CODE, Code);
themed_icon!(DISPLAY, Display);
themed_icon!(DOWNLOAD, Download);
themed_icon!(EXPLORER, Explorer);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(FILE, File);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(LOADING, Loading);
themed_icon!(PLUS, Plus);

/// Listing icon for an object category.
pub fn for_category(category: ObjectCategory) -> Icon {
    match category {
        ObjectCategory::Html => FILE_TEXT,
        ObjectCategory::Css | ObjectCategory::Js => CODE,
        ObjectCategory::Image => FILE_IMAGE,
        ObjectCategory::Other => FILE,
    }
}
