//! Button that flips between dark and light mode.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the page's "user requested toggle" signal. State lives in a
//! `RwSignal<ThemeState>` provided by [`provide_theme_context`] so any other
//! component can react to the active theme.

use leptos::prelude::*;

use crate::config::ThemeConfig;
use crate::dark_mode;
use crate::theme::Theme;
use crate::toggle::ThemeState;

#[cfg(test)]
#[path = "theme_toggle_button_test.rs"]
mod theme_toggle_button_test;

/// Glyph shown on the button: the sun switches back to light, the moon to dark.
pub fn toggle_glyph(theme: Theme) -> &'static str {
    if theme.is_dark() { "☀" } else { "☾" }
}

/// Tooltip naming the mode the button switches to.
pub fn toggle_title(theme: Theme) -> &'static str {
    match theme.inverse() {
        Theme::Dark => "Switch to dark mode",
        Theme::Light => "Switch to light mode",
    }
}

/// Provide theme config and state to descendants.
///
/// State starts light so server and client render the same markup; the stored
/// preference is applied once the component tree is mounted in the browser.
pub fn provide_theme_context(config: ThemeConfig) -> RwSignal<ThemeState> {
    let state = RwSignal::new(ThemeState::default());
    let init_config = config.clone();
    Effect::new(move |_| {
        let theme = dark_mode::init(&init_config);
        state.update(|s| s.set_theme(theme));
    });
    provide_context(config);
    provide_context(state);
    state
}

/// Dark mode toggle button.
#[component]
pub fn ThemeToggleButton() -> impl IntoView {
    let state = expect_context::<RwSignal<ThemeState>>();
    let config = expect_context::<ThemeConfig>();

    let on_click = move |_| {
        let current = state.get_untracked().theme();
        let next = dark_mode::toggle(&config, current);
        state.update(|s| s.set_theme(next));
    };

    view! {
        <button
            class="btn theme-toggle"
            on:click=on_click
            title=move || toggle_title(state.get().theme())
        >
            {move || toggle_glyph(state.get().theme())}
        </button>
    }
}
