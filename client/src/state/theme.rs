//! Color theme selection.
//!
//! DESIGN
//! ======
//! `Theme` is a plain value so it can be stored in an `RwSignal` and parsed
//! from `localStorage` without touching the DOM. Browser side effects live in
//! `util::theme`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Active color theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to `localStorage`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored preference. Unknown values yield `None` so the caller
    /// can fall back to the system preference.
    #[must_use]
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Glyph shown on the toggle button; it names the theme you switch to.
    #[must_use]
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}
