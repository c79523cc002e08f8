//! Theme state holder and the init/toggle/render cycle.
//!
//! DESIGN
//! ======
//! [`ThemeState`] is the single source of truth; the root marker is a
//! projection of it written by [`ThemeToggle::render`]. Initialization is an
//! explicit call made by the host page rather than a load-event hook.
//!
//! TRADE-OFFS
//! ==========
//! Persistence and rendering are best-effort: backend failures are logged and
//! never roll back an in-memory transition, so the visible toggle keeps
//! working when storage is disabled or full.

use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::root::RootMarker;
use crate::store::PreferenceStore;
use crate::theme::Theme;

#[cfg(test)]
#[path = "toggle_test.rs"]
mod toggle_test;

/// Current presentation mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    theme: Theme,
}

impl ThemeState {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    /// Flip to the other theme and return it.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.inverse();
        self.theme
    }
}

/// Keeps a [`ThemeState`] in sync with a persisted preference and a root marker.
pub struct ThemeToggle<S, R> {
    config: ThemeConfig,
    state: ThemeState,
    store: S,
    root: R,
    initialized: bool,
}

impl<S: PreferenceStore, R: RootMarker> ThemeToggle<S, R> {
    /// Build a toggle in the default light state. Nothing is read or rendered
    /// until [`ThemeToggle::init`] runs.
    pub fn new(config: ThemeConfig, store: S, root: R) -> Self {
        Self::from_state(config, ThemeState::default(), store, root)
    }

    /// Build a toggle around state the caller already holds (for example a
    /// reactive signal), again without reading or rendering.
    pub fn from_state(config: ThemeConfig, state: ThemeState, store: S, root: R) -> Self {
        Self { config, state, store, root, initialized: false }
    }

    /// Apply the stored preference: `"dark"` turns the marker on, anything
    /// else (including no entry) leaves the light default.
    pub fn init(&mut self) -> Theme {
        let stored = match self.store.read(&self.config.storage_key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("theme: reading {:?} failed, using light: {e}", self.config.storage_key);
                None
            }
        };
        let theme = Theme::from_stored(stored.as_deref());
        log::debug!("theme: init stored={stored:?} applied={theme}");
        self.state.set_theme(theme);
        self.render_or_warn();
        self.initialized = true;
        theme
    }

    /// Toggle, first applying the stored preference if the host never called
    /// [`ThemeToggle::init`].
    pub fn toggle_or_init(&mut self) -> Theme {
        if !self.initialized {
            log::warn!("theme: toggle requested before init; applying stored preference first");
            self.init();
        }
        self.toggle()
    }

    /// Invert the theme, render it, and persist the result.
    pub fn toggle(&mut self) -> Theme {
        let next = self.state.toggle();
        log::debug!("theme: toggled to {next}");
        self.render_or_warn();
        self.persist_or_warn(next);
        next
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.state.theme()
    }

    #[must_use]
    pub fn state(&self) -> ThemeState {
        self.state
    }

    /// Switch to `theme` explicitly, rendering and persisting like a toggle.
    pub fn set_theme(&mut self, theme: Theme) {
        self.state.set_theme(theme);
        self.render_or_warn();
        self.persist_or_warn(theme);
    }

    /// Write the marker so it matches the current state. Leaves the root
    /// untouched when it already matches.
    pub fn render(&mut self) -> Result<(), ThemeError> {
        let want = self.state.is_dark();
        let class = &self.config.dark_class;
        match self.root.has_marker(class) {
            Ok(present) if present == want => Ok(()),
            _ => self.root.set_marker(class, want),
        }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn root(&self) -> &R {
        &self.root
    }

    fn render_or_warn(&mut self) {
        if let Err(e) = self.render() {
            log::warn!("theme: render failed: {e}");
        }
    }

    fn persist_or_warn(&mut self, theme: Theme) {
        if let Err(e) = self.store.write(&self.config.storage_key, theme.as_str()) {
            log::warn!("theme: persisting {theme} failed: {e}");
        }
    }
}
