// Theme module - weather modes, palettes and the shared mode cell
//
// The whole page follows one weather mode. This module owns the closed set of
// modes, the fixed palette table derived from them, and the provider/handle
// pair that distributes the active mode to every display section.

pub mod palette;
pub mod state;

use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;
use thiserror::Error;

// Neutral text colors shared by every weather palette

/// Body copy - gray-300
pub const BODY_TEXT: Color = Color::Rgb(209, 213, 219);

/// Secondary copy, captions, inactive nav items - gray-400
pub const MUTED_TEXT: Color = Color::Rgb(156, 163, 175);

/// Borders of unfocused inputs and dividers - gray-700
pub const DIM_BORDER: Color = Color::Rgb(55, 65, 81);

/// Active weather mode
///
/// Closed set of three mutually exclusive themes. Exactly one is active for
/// the lifetime of a session; there is no "off" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Weather {
    /// Snow, white-on-slate palette (default at session start)
    #[default]
    Winter,
    /// Sun, warm amber palette
    Summer,
    /// Rain, cool slate-blue palette
    Rain,
}

impl Weather {
    /// All modes in selector order
    pub const ALL: [Weather; 3] = [Weather::Winter, Weather::Summer, Weather::Rain];

    /// Lowercase identifier used in logs and for name lookups
    pub fn as_str(self) -> &'static str {
        match self {
            Weather::Winter => "winter",
            Weather::Summer => "summer",
            Weather::Rain => "rain",
        }
    }

    /// Title-case label shown in the weather selector
    pub fn label(self) -> &'static str {
        match self {
            Weather::Winter => "Winter",
            Weather::Summer => "Summer",
            Weather::Rain => "Rain",
        }
    }

    /// Selector glyph
    pub fn icon(self) -> &'static str {
        match self {
            Weather::Winter => "❄",
            Weather::Summer => "☀",
            Weather::Rain => "☂",
        }
    }

    /// Icon color in the selector (white, yellow-400, blue-400)
    pub fn icon_color(self) -> Color {
        match self {
            Weather::Winter => Color::Rgb(255, 255, 255),
            Weather::Summer => Color::Rgb(250, 204, 21),
            Weather::Rain => Color::Rgb(96, 165, 250),
        }
    }

    /// Position of this mode in [`Weather::ALL`]
    pub fn index(self) -> usize {
        match self {
            Weather::Winter => 0,
            Weather::Summer => 1,
            Weather::Rain => 2,
        }
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weather {
    type Err = ThemeError;

    /// Strict parse, case-insensitive. Unknown names are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "winter" => Ok(Weather::Winter),
            "summer" => Ok(Weather::Summer),
            "rain" => Ok(Weather::Rain),
            _ => Err(ThemeError::UnknownWeather(s.to_string())),
        }
    }
}

/// A theme handle was used outside the lifetime of its provider
///
/// Either the handle was never attached to a provider, or the provider has
/// already been dropped. This is a wiring bug and is never recovered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("theme handle used outside of a ThemeProvider scope")]
pub struct ScopeError;

/// Errors raised by the theme layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error(transparent)]
    Scope(#[from] ScopeError),

    #[error("unknown weather mode: {0:?}")]
    UnknownWeather(String),
}

// Re-export the pieces display sections are allowed to depend on
pub use palette::{palette_for, ThemePalette};
pub use state::{ListenerId, ThemeHandle, ThemeProvider};
