//! Custom error types for the application.
//!
//! - [`StorageError`] - Failures reported by a [`StorageProvider`](super::StorageProvider)
//! - [`TransitionError`] - Rejected selection state transitions
//! - [`BrowserError`] - Blob / window operations behind preview actions
//!
//! None is fatal. The `Display` text is what the UI shows.

use thiserror::Error;

/// Storage provider errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Bucket or object does not exist
    #[error("not found: {0}")]
    NotFound(String),
    /// Caller may not access the bucket or object
    #[error("access denied: {0}")]
    Unauthorized(String),
    /// Network or service failure, worth retrying
    #[error("storage temporarily unavailable: {0}")]
    Transient(String),
    /// Malformed identifier or catalog data
    #[error("invalid input: {0}")]
    Invalid(String),
}

/// Selection state machine errors.
///
/// A failed transition never changes the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// Selections can only change while browsing
    #[error("selection can only change while browsing")]
    NotBrowsing,
    /// `back` called while already browsing
    #[error("not previewing")]
    NotPreviewing,
    /// Bucket name was empty after trimming
    #[error("bucket name must not be blank")]
    BlankBucket,
    /// Object name was empty after trimming
    #[error("object name must not be blank")]
    BlankObject,
    /// Object selected before any bucket
    #[error("select a bucket first")]
    NoBucket,
    /// Preview requested without both bucket and object
    #[error("select a bucket and an object to display")]
    IncompleteSelection,
}

/// Browser API failures for the open / download preview actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrowserError {
    /// Browser window or document not available
    #[error("browser window not available")]
    NoWindow,
    /// Failed to build a Blob or object URL
    #[error("failed to prepare content: {0}")]
    BlobFailed(String),
    /// `window.open` returned nothing (popup blocked)
    #[error("new tab was blocked by the browser")]
    PopupBlocked,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::Transient("timeout".to_string());
        assert_eq!(err.to_string(), "storage temporarily unavailable: timeout");
        let err = StorageError::NotFound("demo/a.txt".to_string());
        assert_eq!(err.to_string(), "not found: demo/a.txt");
    }

    #[test]
    fn test_transition_error_display() {
        assert_eq!(
            TransitionError::IncompleteSelection.to_string(),
            "select a bucket and an object to display"
        );
    }
}
