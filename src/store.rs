//! Persistent preference storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser backend wraps `window.localStorage` and only exists under the
//! `hydrate` feature. [`MemoryStore`] backs tests and SSR builds so the
//! toggle logic runs without a browser.

use std::collections::HashMap;

use crate::error::ThemeError;

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

/// Origin-scoped string key-value store that survives page loads.
pub trait PreferenceStore {
    /// Read the value stored under `key`, or `None` if nothing is recorded.
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError>;

    /// Create or overwrite the value stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// In-process store with the same single-key semantics as `localStorage`.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry, as if written by an earlier page load.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_owned(), value.to_owned());
        store
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// `window.localStorage` backend.
///
/// Binding never fails; when the host exposes no storage every call reports
/// [`ThemeError::StorageUnavailable`] and the caller decides what to do.
#[cfg(feature = "hydrate")]
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

#[cfg(feature = "hydrate")]
impl LocalStorage {
    /// Bind to the current window's `localStorage`.
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| match w.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("theme: localStorage access denied: {e:?}");
                None
            }
        });
        Self { storage }
    }

    fn storage(&self) -> Result<&web_sys::Storage, ThemeError> {
        self.storage.as_ref().ok_or(ThemeError::StorageUnavailable)
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| ThemeError::Storage(format!("{e:?}")))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| ThemeError::Storage(format!("{e:?}")))
    }
}
