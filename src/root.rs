//! Presentational marker on the page's root element.
//!
//! Stylesheets key off the marker class; this module only adds or removes it.

use std::collections::BTreeSet;

use crate::error::ThemeError;

#[cfg(feature = "hydrate")]
use crate::config::MarkerTarget;

#[cfg(test)]
#[path = "root_test.rs"]
mod root_test;

/// An element whose class list carries the dark marker.
pub trait RootMarker {
    fn has_marker(&self, class: &str) -> Result<bool, ThemeError>;

    /// Add (`present == true`) or remove the marker class. Idempotent.
    fn set_marker(&mut self, class: &str, present: bool) -> Result<(), ThemeError>;
}

/// Class list held in memory, standing in for a DOM element.
#[derive(Clone, Debug, Default)]
pub struct MemoryRoot {
    classes: BTreeSet<String>,
}

impl MemoryRoot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_class(class: &str) -> Self {
        let mut root = Self::new();
        root.classes.insert(class.to_owned());
        root
    }

    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    #[must_use]
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }
}

impl RootMarker for MemoryRoot {
    fn has_marker(&self, class: &str) -> Result<bool, ThemeError> {
        Ok(self.classes.contains(class))
    }

    fn set_marker(&mut self, class: &str, present: bool) -> Result<(), ThemeError> {
        if present {
            self.classes.insert(class.to_owned());
        } else {
            self.classes.remove(class);
        }
        Ok(())
    }
}

/// `<html>` or `<body>` of the live document.
#[cfg(feature = "hydrate")]
pub struct DocumentRoot {
    element: Option<web_sys::Element>,
}

#[cfg(feature = "hydrate")]
impl DocumentRoot {
    /// Resolve the configured target element in the current document.
    pub fn resolve(target: MarkerTarget) -> Self {
        let doc = web_sys::window().and_then(|w| w.document());
        let element = doc.and_then(|doc| match target {
            MarkerTarget::DocumentElement => doc.document_element(),
            MarkerTarget::Body => doc.body().map(Into::into),
        });
        Self { element }
    }

    fn element(&self) -> Result<&web_sys::Element, ThemeError> {
        self.element.as_ref().ok_or(ThemeError::RootUnavailable)
    }
}

#[cfg(feature = "hydrate")]
impl RootMarker for DocumentRoot {
    fn has_marker(&self, class: &str) -> Result<bool, ThemeError> {
        Ok(self.element()?.class_list().contains(class))
    }

    fn set_marker(&mut self, class: &str, present: bool) -> Result<(), ThemeError> {
        let class_list = self.element()?.class_list();
        let result = if present { class_list.add_1(class) } else { class_list.remove_1(class) };
        result.map_err(|e| ThemeError::Marker(format!("{e:?}")))
    }
}
