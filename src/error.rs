//! Errors raised by storage and document backends.

/// Failure reported by a [`crate::store::PreferenceStore`] or
/// [`crate::root::RootMarker`] backend.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// The host exposes no persistent store (disabled, sandboxed, or no window).
    #[error("persistent storage is unavailable")]
    StorageUnavailable,
    /// The store rejected a read or write (for example, quota exceeded).
    #[error("storage operation failed: {0}")]
    Storage(String),
    /// The configured root element does not exist.
    #[error("document root element is unavailable")]
    RootUnavailable,
    /// The root element rejected the class-list mutation.
    #[error("failed to update root marker: {0}")]
    Marker(String),
    /// Host-supplied configuration could not be parsed.
    #[error("invalid theme config: {0}")]
    Config(#[from] serde_json::Error),
}
