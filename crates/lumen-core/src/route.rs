//! Page selection from the location path.

use serde::{Deserialize, Serialize};

/// Path that selects the weather page.
pub const WEATHER_PATH: &str = "/weather";

/// Pages the application can mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    /// Landing page, mounted for every path but the weather one.
    #[default]
    Home,
    /// Weather page.
    Weather,
}

impl Page {
    /// Select the page for a location path.
    ///
    /// Only an exact `/weather` selects [`Page::Weather`]; trailing slashes,
    /// different casing and sub-paths all fall back to [`Page::Home`].
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        if path == WEATHER_PATH {
            Self::Weather
        } else {
            Self::Home
        }
    }

    /// Canonical path of the page.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Weather => WEATHER_PATH,
        }
    }

    /// Document title for the page.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Lumen",
            Self::Weather => "Lumen · Weather",
        }
    }
}
