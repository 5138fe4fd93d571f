//! Bucket/object selection state machine.
//!
//! ```text
//!            select_bucket / select_object
//!                 ┌──────────┐
//!                 ▼          │
//!   ──▶ Browsing ─┴──────────┘
//!          │   ▲
//!  confirm │   │ back
//!          ▼   │
//!        Previewing
//! ```
//!
//! Every transition either succeeds or returns a [`TransitionError`] and
//! leaves the selection untouched. Going back keeps both selections.

use super::error::TransitionError;
use crate::models::{BucketId, ViewState};

/// Current bucket, object and view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    bucket: Option<BucketId>,
    object: Option<String>,
    view: ViewState,
}

impl Selection {
    /// Browsing, nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bucket(&self) -> Option<&BucketId> {
        self.bucket.as_ref()
    }

    pub fn object(&self) -> Option<&str> {
        self.object.as_deref()
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    /// Whether [`confirm_preview`](Self::confirm_preview) would succeed.
    pub fn can_preview(&self) -> bool {
        self.bucket.is_some() && self.object.is_some()
    }

    /// The `(bucket, object)` pair being previewed, if any.
    pub fn preview_target(&self) -> Option<(&BucketId, &str)> {
        if !self.view.is_previewing() {
            return None;
        }
        self.bucket.as_ref().zip(self.object.as_deref())
    }

    /// Select a bucket from a preset or free text.
    ///
    /// The candidate is trimmed. The previously selected object is kept
    /// even though it may not exist in the new bucket. Returns `true` if
    /// the bucket actually changed.
    pub fn select_bucket(&mut self, candidate: &str) -> Result<bool, TransitionError> {
        self.ensure_browsing()?;
        let id = BucketId::parse(candidate).ok_or(TransitionError::BlankBucket)?;
        let changed = self.bucket.as_ref() != Some(&id);
        self.bucket = Some(id);
        Ok(changed)
    }

    /// Select an object in the current bucket.
    pub fn select_object(&mut self, name: &str) -> Result<(), TransitionError> {
        self.ensure_browsing()?;
        if self.bucket.is_none() {
            return Err(TransitionError::NoBucket);
        }
        if name.trim().is_empty() {
            return Err(TransitionError::BlankObject);
        }
        self.object = Some(name.to_string());
        Ok(())
    }

    /// Enter the preview page.
    ///
    /// Calling it while already previewing is a no-op.
    pub fn confirm_preview(&mut self) -> Result<(), TransitionError> {
        if !self.can_preview() {
            return Err(TransitionError::IncompleteSelection);
        }
        self.view = ViewState::Previewing;
        Ok(())
    }

    /// Return to browsing, keeping both selections.
    pub fn back(&mut self) -> Result<(), TransitionError> {
        if !self.view.is_previewing() {
            return Err(TransitionError::NotPreviewing);
        }
        self.view = ViewState::Browsing;
        Ok(())
    }

    fn ensure_browsing(&self) -> Result<(), TransitionError> {
        if self.view.is_previewing() {
            Err(TransitionError::NotBrowsing)
        } else {
            Ok(())
        }
    }
}
