//! View model types representing renderable page state.
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data: the
//! player URL is already built and the embed options already serialized.
//!
//! # Example
//!
//! ```rust
//! use ministream::app::{DisplayMode, Theme};
//! use ministream::ui::{HeaderInfo, ModeToggleInfo, PageViewModel, PlayerView};
//!
//! let vm = PageViewModel {
//!     theme: Theme::Dark,
//!     header: HeaderInfo::default(),
//!     error: None,
//!     mode_toggle: ModeToggleInfo {
//!         mode: DisplayMode::Minimal,
//!         enabled: true,
//!         title: "Show video with chat".to_string(),
//!     },
//!     player: PlayerView::Empty,
//! };
//! assert_eq!(vm.header.title, "MINIStream");
//! ```

use crate::app::{DisplayMode, Theme};

/// Complete page view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageViewModel {
    /// Theme applied to the document root.
    pub theme: Theme,

    /// Title and tagline.
    pub header: HeaderInfo,

    /// Message shown under the input bar, if the last submission was rejected.
    pub error: Option<String>,

    /// State of the display mode switch.
    pub mode_toggle: ModeToggleInfo,

    /// What the player area shows.
    pub player: PlayerView,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub subtitle: String,
}

impl Default for HeaderInfo {
    fn default() -> Self {
        Self {
            title: "MINIStream".to_string(),
            subtitle: "A minimal Twitch player".to_string(),
        }
    }
}

/// Display mode switch information.
///
/// The switch is disabled for VODs and clips, which have no chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeToggleInfo {
    /// Current display mode; decides the icon.
    pub mode: DisplayMode,

    /// Whether clicking the switch does anything.
    pub enabled: bool,

    /// Tooltip text.
    pub title: String,
}

/// Player area display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerView {
    /// No reference; the player area is absent.
    Empty,

    /// Reference known, hostname not yet; shows a placeholder.
    Detecting,

    /// Lightweight iframe player.
    Iframe {
        src: String,
        title: String,
        /// Parent domain reported in the diagnostics line.
        parent: String,
    },

    /// Container for the full interactive embed.
    Embed {
        /// Embed constructor options as JSON.
        options: String,
        parent: String,
    },
}
