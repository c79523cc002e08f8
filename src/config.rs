//! Theme toggle configuration.
//!
//! Hosts either take [`ThemeConfig::default`] or pass a JSON object to
//! `initTheme`; any field left out keeps its default.

use serde::Deserialize;

use crate::error::ThemeError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_DARK_CLASS: &str = "dark-mode";

/// Which element carries the dark marker class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerTarget {
    /// The `<html>` element.
    DocumentElement,
    /// The `<body>` element, matching `body.dark-mode` stylesheet rules.
    #[default]
    Body,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub dark_class: String,
    pub target: MarkerTarget,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            dark_class: DEFAULT_DARK_CLASS.to_owned(),
            target: MarkerTarget::Body,
        }
    }
}

impl ThemeConfig {
    /// Parse a host-supplied JSON object, e.g. `{"target": "body"}`.
    ///
    /// Blank `storage_key` or `dark_class` values fall back to their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        let parsed: Self = serde_json::from_str(raw)?;
        Ok(parsed.normalized())
    }

    /// Parse optional host JSON, falling back to defaults when it is absent
    /// or malformed.
    #[must_use]
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        match raw.map(Self::from_json) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                log::warn!("theme: {e}; using defaults");
                Self::default()
            }
            None => Self::default(),
        }
    }

    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self.normalized()
    }

    #[must_use]
    pub fn with_dark_class(mut self, class: impl Into<String>) -> Self {
        self.dark_class = class.into();
        self.normalized()
    }

    #[must_use]
    pub fn with_target(mut self, target: MarkerTarget) -> Self {
        self.target = target;
        self
    }

    fn normalized(mut self) -> Self {
        let key = self.storage_key.trim();
        self.storage_key = if key.is_empty() { DEFAULT_STORAGE_KEY.to_owned() } else { key.to_owned() };
        let class = self.dark_class.trim();
        self.dark_class = if class.is_empty() { DEFAULT_DARK_CLASS.to_owned() } else { class.to_owned() };
        self
    }
}
