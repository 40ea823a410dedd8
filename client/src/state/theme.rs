//! Display theme selection.
//!
//! DESIGN
//! ======
//! The theme is a closed two-variant enum so the "dark or light" invariant is
//! carried by the type. String forms match the values written to storage and
//! to the `data-theme` document attribute.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

/// Page display mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Storage and attribute value for this theme.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// The other theme. Applying it twice returns the starting value.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Title-case name of the mode a toggle press switches to.
    pub fn toggle_label(self) -> &'static str {
        match self.toggled() {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored value that does not name a known theme.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0:?}")]
pub struct ParseThemeError(pub String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim();
        if value.eq_ignore_ascii_case("dark") {
            Ok(Self::Dark)
        } else if value.eq_ignore_ascii_case("light") {
            Ok(Self::Light)
        } else {
            Err(ParseThemeError(raw.to_owned()))
        }
    }
}
