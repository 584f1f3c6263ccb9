//! Terminal color themes.
//!
//! The `theme` command validates against this closed set; the active theme
//! itself is session state, read by the presentation layer.

use std::fmt;
use std::str::FromStr;

/// The four selectable terminal themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Vscode,
    Cyberpunk,
    Retro,
    Classic,
}

impl Theme {
    /// All themes, in cycle order.
    pub const ALL: [Theme; 4] = [Theme::Vscode, Theme::Cyberpunk, Theme::Retro, Theme::Classic];

    /// The theme name as typed.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Vscode => "vscode",
            Theme::Cyberpunk => "cyberpunk",
            Theme::Retro => "retro",
            Theme::Classic => "classic",
        }
    }

    /// Parse a theme name (case-sensitive, as the UI sends it).
    pub fn parse(name: &str) -> Option<Theme> {
        Theme::ALL.iter().copied().find(|t| t.as_str() == name)
    }

    /// The next theme in cycle order (used by the theme hotkey).
    pub fn cycle(&self) -> Theme {
        let idx = Theme::ALL.iter().position(|t| t == self).unwrap_or(0);
        Theme::ALL[(idx + 1) % Theme::ALL.len()]
    }

    /// Comma-separated list of valid theme names, for hints.
    pub fn list() -> String {
        Self::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::parse(s).ok_or(())
    }
}
