//! Explorer-related view types.

/// Which page the explorer is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    /// Bucket picker and object list (default)
    #[default]
    Browsing,
    /// Full page content preview
    Previewing,
}

impl ViewState {
    pub fn is_previewing(self) -> bool {
        matches!(self, Self::Previewing)
    }
}
