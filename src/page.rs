//! JavaScript entry points for pages that are not Leptos apps.
//!
//! The host page calls `initTheme()` once when it has loaded and wires its
//! own control to `toggleTheme()`. Nothing here runs on its own.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::config::ThemeConfig;
use crate::root::DocumentRoot;
use crate::store::LocalStorage;
use crate::theme::Theme;
use crate::toggle::ThemeToggle;

type PageToggle = ThemeToggle<LocalStorage, DocumentRoot>;

thread_local! {
    static PAGE: RefCell<Option<PageToggle>> = const { RefCell::new(None) };
}

fn install_logging() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        log::debug!("theme: console logger already installed: {e}");
    }
}

fn bind(config: ThemeConfig) -> PageToggle {
    let root = DocumentRoot::resolve(config.target);
    ThemeToggle::new(config, LocalStorage::open(), root)
}

/// Apply the stored preference and return the active theme name.
///
/// `config_json` may override `storage_key`, `dark_class`, and `target`
/// (`"body"` or `"document_element"`); malformed JSON falls back to defaults.
#[wasm_bindgen(js_name = initTheme)]
pub fn init_theme(config_json: Option<String>) -> String {
    install_logging();
    let mut toggle = bind(ThemeConfig::from_json_or_default(config_json.as_deref()));
    let theme = toggle.init();
    PAGE.with(|page| *page.borrow_mut() = Some(toggle));
    theme.as_str().to_owned()
}

/// Flip the theme, persist it, and return the new theme name.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() -> String {
    PAGE.with(|page| {
        let mut slot = page.borrow_mut();
        slot.get_or_insert_with(|| bind(ThemeConfig::default()))
            .toggle_or_init()
            .as_str()
            .to_owned()
    })
}

/// Name of the active theme, or `"light"` before `initTheme` has run.
#[wasm_bindgen(js_name = currentTheme)]
pub fn current_theme() -> String {
    PAGE.with(|page| {
        page.borrow()
            .as_ref()
            .map_or(Theme::Light, |toggle| toggle.theme())
            .as_str()
            .to_owned()
    })
}
