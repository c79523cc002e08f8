//! # theme-toggle
//!
//! Dark/light display mode for web pages, persisted in `localStorage`.
//!
//! The active theme is an explicit [`Theme`] held in a [`ThemeState`]; the
//! page's root element only mirrors it through a marker class that
//! stylesheets key off. Hosts initialize deliberately, either through the
//! Leptos [`components::theme_toggle_button`] context or the `initTheme` /
//! `toggleTheme` WASM exports.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | The `Theme` value and its storage encoding |
//! | [`config`] | Storage key, marker class, and marker target |
//! | [`error`] | Backend failure taxonomy |
//! | [`store`] | Persistent preference store trait and backends |
//! | [`root`] | Root element marker trait and backends |
//! | [`toggle`] | State holder and the init/toggle/render cycle |
//! | [`dark_mode`] | Page-level helpers bound to browser backends |
//! | [`components`] | Leptos toggle button and context provider |

pub mod components;
pub mod config;
pub mod dark_mode;
pub mod error;
pub mod root;
pub mod store;
pub mod theme;
pub mod toggle;

#[cfg(feature = "hydrate")]
pub mod page;

pub use config::{MarkerTarget, ThemeConfig};
pub use error::ThemeError;
pub use theme::Theme;
pub use toggle::{ThemeState, ThemeToggle};
