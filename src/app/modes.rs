//! Theme and display mode state types.
//!
//! These enums are the two user-toggleable switches of the page. The theme is
//! applied to the document and forwarded to the full embed; the display mode
//! selects between the lightweight iframe player and the full interactive embed.
//!
//! # Example
//!
//! ```rust
//! use ministream::app::modes::{DisplayMode, Theme};
//!
//! assert_eq!(Theme::Light.toggled(), Theme::Dark);
//! assert_eq!(DisplayMode::Minimal.toggled(), DisplayMode::Full);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Page color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Default light scheme.
    #[default]
    Light,
    /// Dark scheme. Adds the `dark` class to the document root.
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Name used by the embed API and as the document class.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme {other:?}")),
        }
    }
}

/// Player display mode.
///
/// `Full` is only meaningful for live channels, where it adds the chat next to
/// the video. VODs in full mode get the interactive embed without chat; clips
/// always use the iframe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Lightweight iframe, video only.
    #[default]
    Minimal,
    /// Full interactive embed.
    Full,
}

impl DisplayMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Minimal => Self::Full,
            Self::Full => Self::Minimal,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimal" => Ok(Self::Minimal),
            "full" => Ok(Self::Full),
            other => Err(format!("unknown display mode {other:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_are_involutions() {
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(DisplayMode::Full.toggled().toggled(), DisplayMode::Full);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(" Dark ".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("FULL".parse::<DisplayMode>(), Ok(DisplayMode::Full));
        assert!("sepia".parse::<Theme>().is_err());
    }
}
