//! Leptos UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read theme state from Leptos context and forward user input to
//! the [`crate::dark_mode`] helpers.

pub mod theme_toggle_button;
