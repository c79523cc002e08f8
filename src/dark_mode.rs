//! Dark mode initialization and toggle for the running page.
//!
//! Reads the preference from `localStorage` and applies the configured
//! marker class (`dark-mode` by default) to the root element. Toggle writes
//! back to `localStorage` and updates the class. Requires a browser
//! environment.
//!
//! TRADE-OFFS
//! ==========
//! Without the `hydrate` feature every function is a deterministic no-op so
//! SSR and native test builds never touch browser APIs.

use crate::config::ThemeConfig;
use crate::theme::Theme;
use crate::toggle::ThemeState;

#[cfg(feature = "hydrate")]
use crate::root::DocumentRoot;
#[cfg(feature = "hydrate")]
use crate::store::{LocalStorage, PreferenceStore};
#[cfg(feature = "hydrate")]
use crate::toggle::ThemeToggle;

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
fn page_toggle(config: &ThemeConfig, state: ThemeState) -> ThemeToggle<LocalStorage, DocumentRoot> {
    ThemeToggle::from_state(config.clone(), state, LocalStorage::open(), DocumentRoot::resolve(config.target))
}

/// Read the stored preference without touching the document.
///
/// Returns [`Theme::Dark`] only when `"dark"` is stored under the configured key.
pub fn read_preference(config: &ThemeConfig) -> Theme {
    #[cfg(feature = "hydrate")]
    {
        match LocalStorage::open().read(&config.storage_key) {
            Ok(value) => Theme::from_stored(value.as_deref()),
            Err(e) => {
                log::warn!("theme: reading preference failed: {e}");
                Theme::Light
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Theme::Light
    }
}

/// Apply the stored preference to the root element and return it.
pub fn init(config: &ThemeConfig) -> Theme {
    #[cfg(feature = "hydrate")]
    {
        page_toggle(config, ThemeState::default()).init()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        read_preference(config)
    }
}

/// Set or clear the marker class so the page shows `theme`.
pub fn apply(config: &ThemeConfig, theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = page_toggle(config, ThemeState::new(theme)).render() {
            log::warn!("theme: render failed: {e}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, theme);
    }
}

/// Toggle from `current` and persist the new preference to `localStorage`.
pub fn toggle(config: &ThemeConfig, current: Theme) -> Theme {
    #[cfg(feature = "hydrate")]
    {
        page_toggle(config, ThemeState::new(current)).toggle()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        ThemeState::new(current).toggle()
    }
}
