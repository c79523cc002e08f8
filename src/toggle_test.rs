use super::*;
use crate::config::MarkerTarget;
use crate::root::MemoryRoot;
use crate::store::MemoryStore;

// =============================================================
// Helpers
// =============================================================

const KEY: &str = "theme";
const CLASS: &str = "dark-mode";

fn toggle_with(store: MemoryStore) -> ThemeToggle<MemoryStore, MemoryRoot> {
    ThemeToggle::new(ThemeConfig::default(), store, MemoryRoot::new())
}

fn marker(t: &ThemeToggle<MemoryStore, MemoryRoot>) -> bool {
    t.root().contains(CLASS)
}

fn stored(t: &ThemeToggle<MemoryStore, MemoryRoot>) -> Option<&str> {
    t.store().get(KEY)
}

/// Store whose reads and writes always fail, like a disabled `localStorage`.
struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn read(&self, _key: &str) -> Result<Option<String>, ThemeError> {
        Err(ThemeError::StorageUnavailable)
    }

    fn write(&mut self, _key: &str, _value: &str) -> Result<(), ThemeError> {
        Err(ThemeError::Storage("quota exceeded".into()))
    }
}

/// Root that refuses every mutation, like a missing `<body>`.
struct MissingRoot;

impl RootMarker for MissingRoot {
    fn has_marker(&self, _class: &str) -> Result<bool, ThemeError> {
        Err(ThemeError::RootUnavailable)
    }

    fn set_marker(&mut self, _class: &str, _present: bool) -> Result<(), ThemeError> {
        Err(ThemeError::RootUnavailable)
    }
}

/// Memory root that counts class-list writes.
#[derive(Default)]
struct CountingRoot {
    inner: MemoryRoot,
    writes: usize,
}

impl RootMarker for CountingRoot {
    fn has_marker(&self, class: &str) -> Result<bool, ThemeError> {
        self.inner.has_marker(class)
    }

    fn set_marker(&mut self, class: &str, present: bool) -> Result<(), ThemeError> {
        self.writes += 1;
        self.inner.set_marker(class, present)
    }
}

// =============================================================
// ThemeState
// =============================================================

#[test]
fn theme_state_default_is_light() {
    let state = ThemeState::default();
    assert_eq!(state.theme(), Theme::Light);
    assert!(!state.is_dark());
}

#[test]
fn theme_state_toggle_returns_new_theme() {
    let mut state = ThemeState::default();
    assert_eq!(state.toggle(), Theme::Dark);
    assert_eq!(state.toggle(), Theme::Light);
}

#[test]
fn theme_state_set_theme_overrides() {
    let mut state = ThemeState::new(Theme::Light);
    state.set_theme(Theme::Dark);
    assert!(state.is_dark());
}

// =============================================================
// init
// =============================================================

#[test]
fn new_does_not_touch_store_or_root() {
    let t = toggle_with(MemoryStore::with_entry(KEY, "dark"));
    assert_eq!(t.theme(), Theme::Light);
    assert!(!marker(&t));
}

#[test]
fn init_restores_dark() {
    let mut t = toggle_with(MemoryStore::with_entry(KEY, "dark"));
    assert_eq!(t.init(), Theme::Dark);
    assert!(marker(&t));
}

#[test]
fn init_without_preference_stays_light() {
    let mut t = toggle_with(MemoryStore::new());
    assert_eq!(t.init(), Theme::Light);
    assert!(!marker(&t));
}

#[test]
fn init_with_light_preference_stays_light() {
    let mut t = toggle_with(MemoryStore::with_entry(KEY, "light"));
    assert_eq!(t.init(), Theme::Light);
    assert!(!marker(&t));
}

#[test]
fn init_treats_unrecognized_value_as_light() {
    let mut t = toggle_with(MemoryStore::with_entry(KEY, ""));
    assert_eq!(t.init(), Theme::Light);
    assert!(!marker(&t));
}

#[test]
fn init_does_not_write_store() {
    let mut t = toggle_with(MemoryStore::new());
    t.init();
    assert_eq!(stored(&t), None);
}

#[test]
fn init_twice_is_idempotent() {
    for value in ["dark", "light", "garbage"] {
        let mut t = toggle_with(MemoryStore::with_entry(KEY, value));
        let first = (t.init(), marker(&t));
        let second = (t.init(), marker(&t));
        assert_eq!(first, second, "value = {value}");
    }
}

#[test]
fn init_ignores_other_keys() {
    let mut t = toggle_with(MemoryStore::with_entry("color_scheme", "dark"));
    assert_eq!(t.init(), Theme::Light);
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_round_trip_persists_dark_then_light() {
    let mut t = toggle_with(MemoryStore::new());
    t.init();

    assert_eq!(t.toggle(), Theme::Dark);
    assert_eq!(stored(&t), Some("dark"));
    assert!(marker(&t));

    assert_eq!(t.toggle(), Theme::Light);
    assert_eq!(stored(&t), Some("light"));
    assert!(!marker(&t));
}

#[test]
fn toggle_is_pure_inversion_from_either_state() {
    for start in [Theme::Light, Theme::Dark] {
        let mut t = toggle_with(MemoryStore::new());
        t.set_theme(start);
        let before = marker(&t);

        let next = t.toggle();

        assert_eq!(marker(&t), !before);
        assert_eq!(next.is_dark(), !before);
        assert_eq!(stored(&t), Some(next.as_str()));
    }
}

#[test]
fn toggle_after_dark_init_goes_light() {
    let mut t = toggle_with(MemoryStore::with_entry(KEY, "dark"));
    t.init();
    assert_eq!(t.toggle(), Theme::Light);
    assert_eq!(stored(&t), Some("light"));
}

#[test]
fn persisted_toggle_survives_reload() {
    let mut first = toggle_with(MemoryStore::new());
    first.init();
    first.toggle();

    let mut reloaded = toggle_with(first.store().clone());
    assert_eq!(reloaded.init(), Theme::Dark);
    assert!(marker(&reloaded));
}

// =============================================================
// render / set_theme
// =============================================================

#[test]
fn render_resyncs_marker_after_external_change() {
    let mut t = ThemeToggle::new(ThemeConfig::default(), MemoryStore::new(), MemoryRoot::with_class(CLASS));
    t.render().unwrap();
    assert!(!marker(&t));
}

#[test]
fn set_theme_renders_and_persists() {
    let mut t = toggle_with(MemoryStore::new());
    t.set_theme(Theme::Dark);
    assert!(marker(&t));
    assert_eq!(stored(&t), Some("dark"));
    assert_eq!(t.state(), ThemeState::new(Theme::Dark));
}

#[test]
fn custom_config_uses_custom_key_and_class() {
    let cfg = ThemeConfig::default()
        .with_storage_key("site_theme")
        .with_dark_class("night")
        .with_target(MarkerTarget::DocumentElement);
    let mut t = ThemeToggle::new(cfg, MemoryStore::with_entry("site_theme", "dark"), MemoryRoot::new());

    t.init();
    assert!(t.root().contains("night"));
    assert!(!t.root().contains(CLASS));

    t.toggle();
    assert_eq!(t.store().get("site_theme"), Some("light"));
    assert_eq!(t.store().get(KEY), None);
}

#[test]
fn render_skips_write_when_marker_already_matches() {
    let mut t = ThemeToggle::new(ThemeConfig::default(), MemoryStore::new(), CountingRoot::default());
    t.render().unwrap();
    assert_eq!(t.root().writes, 0);

    t.toggle();
    assert_eq!(t.root().writes, 1);
    t.render().unwrap();
    t.render().unwrap();
    assert_eq!(t.root().writes, 1);
    assert!(t.root().inner.contains(CLASS));
}

// =============================================================
// toggle_or_init
// =============================================================

#[test]
fn toggle_or_init_applies_stored_preference_first() {
    let mut t = toggle_with(MemoryStore::with_entry(KEY, "dark"));
    assert_eq!(t.toggle_or_init(), Theme::Light);
    assert_eq!(stored(&t), Some("light"));
    assert!(!marker(&t));
}

#[test]
fn toggle_or_init_without_preference_goes_dark() {
    let mut t = toggle_with(MemoryStore::new());
    assert_eq!(t.toggle_or_init(), Theme::Dark);
    assert_eq!(stored(&t), Some("dark"));
    assert!(marker(&t));
}

#[test]
fn toggle_or_init_after_init_does_not_reread_store() {
    let mut t = toggle_with(MemoryStore::with_entry(KEY, "dark"));
    t.init();
    assert_eq!(t.toggle_or_init(), Theme::Light);
    assert_eq!(t.toggle_or_init(), Theme::Dark);
    assert_eq!(stored(&t), Some("dark"));
}

// =============================================================
// Backend failures
// =============================================================

#[test]
fn broken_store_init_falls_back_to_light() {
    let mut t = ThemeToggle::new(ThemeConfig::default(), BrokenStore, MemoryRoot::new());
    assert_eq!(t.init(), Theme::Light);
    assert!(!t.root().contains(CLASS));
}

#[test]
fn broken_store_toggle_still_changes_visible_state() {
    let mut t = ThemeToggle::new(ThemeConfig::default(), BrokenStore, MemoryRoot::new());
    t.init();
    assert_eq!(t.toggle(), Theme::Dark);
    assert!(t.root().contains(CLASS));
}

#[test]
fn missing_root_toggle_still_persists() {
    let mut t = ThemeToggle::new(ThemeConfig::default(), MemoryStore::new(), MissingRoot);
    assert_eq!(t.toggle(), Theme::Dark);
    assert_eq!(t.store().get(KEY), Some("dark"));
    assert!(matches!(t.render(), Err(ThemeError::RootUnavailable)));
}
