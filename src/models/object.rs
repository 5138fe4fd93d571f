//! Object descriptors shown in the object listing.

use serde::{Deserialize, Serialize};

/// Coarse object category used for listing icons.
///
/// The category comes from the catalog, not from the object name, so it
/// can disagree with what the previewer does (see [`crate::core::classify`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectCategory {
    Html,
    Css,
    Js,
    Image,
    #[default]
    Other,
}

impl ObjectCategory {
    /// Short lowercase label (matches the serialized form).
    pub fn label(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Css => "css",
            Self::Js => "js",
            Self::Image => "image",
            Self::Other => "other",
        }
    }
}

/// A single object in a bucket listing.
///
/// Size and modification date are display labels, not numbers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectDescriptor {
    /// Object name (unique within its bucket listing)
    pub name: String,
    /// Category from the catalog
    #[serde(default)]
    pub category: ObjectCategory,
    /// Human readable size, e.g. "12.5 KB"
    #[serde(rename = "size")]
    pub size_label: String,
    /// Modification date label, e.g. "2024-01-15"
    #[serde(rename = "modified")]
    pub modified_label: String,
}

impl ObjectDescriptor {
    pub fn new(
        name: impl Into<String>,
        category: ObjectCategory,
        size_label: impl Into<String>,
        modified_label: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            size_label: size_label.into(),
            modified_label: modified_label.into(),
        }
    }
}
