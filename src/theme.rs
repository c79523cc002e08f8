//! Display theme value and its storage encoding.
//!
//! DESIGN
//! ======
//! Encoding is exact (`"dark"` / `"light"`), decoding is lenient: anything
//! other than `"dark"` is treated as the default light presentation so a
//! corrupted or foreign value never leaves the page in an undefined state.

use std::fmt;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// One of the two presentation states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Storage string for this theme.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Decode a stored preference. Only the exact string `"dark"` selects dark.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// The other theme.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
