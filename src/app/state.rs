//! View state and its transitions.
//!
//! This module defines [`AppState`], the single owned state container of the
//! page. Every user-visible switch lives here: the theme, the player display
//! mode, the current content reference, the last error and the detected page
//! hostname. State is mutated only through the methods below, which the event
//! handler calls in response to discrete events.
//!
//! # State Components
//!
//! - **Theme**: light or dark, toggled by the user
//! - **Display Mode**: minimal iframe or full embed, toggled for live channels only
//! - **Reference**: the content being shown, from the startup query or a submission
//! - **Error Message**: set by a rejected non-empty submission, cleared on the next edit
//! - **Hostname**: unknown until detected; gates every embed request
//!
//! # Example
//!
//! ```rust
//! use ministream::app::AppState;
//!
//! let mut state = AppState::default();
//! state.init_from_query("?video=999");
//! assert_eq!(state.reference.as_ref().map(|r| r.id()), Some("999"));
//!
//! assert!(state.submit("not a url!! ").is_err());
//! assert!(state.reference.is_none());
//! assert!(state.error_message.is_some());
//! ```

use super::modes::{DisplayMode, Theme};
use crate::domain::{resolve, ContentKind, ContentReference, Rejection};
use crate::infrastructure::reference_from_query;
use crate::player::RenderPlan;

/// Message shown when a non-empty submission cannot be resolved.
pub const INVALID_INPUT_MESSAGE: &str =
    "Invalid Twitch URL. Please make sure it's a valid channel, VOD or clip link.";

/// Central view state container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// Page color scheme, also forwarded to the full embed.
    pub theme: Theme,

    /// Player display mode.
    pub display_mode: DisplayMode,

    /// Content currently shown, if any.
    pub reference: Option<ContentReference>,

    /// User-facing error from the last rejected submission.
    pub error_message: Option<String>,

    /// Page hostname once detected. Used as the embed parent domain.
    pub hostname: Option<String>,
}

impl AppState {
    #[must_use]
    pub fn new(theme: Theme, display_mode: DisplayMode) -> Self {
        Self {
            theme,
            display_mode,
            ..Self::default()
        }
    }

    /// Seeds the reference from the startup query string.
    ///
    /// `channel`, `video` and `clip` are checked in that order and the value
    /// is trusted as-is. Returns `true` if a reference was found.
    pub fn init_from_query(&mut self, search: &str) -> bool {
        match reference_from_query(search) {
            Some(reference) => {
                tracing::debug!(reference = %reference, "reference seeded from location");
                self.reference = Some(reference);
                true
            }
            None => false,
        }
    }

    /// Resolves a submission and updates reference and error.
    ///
    /// The previous error is cleared before resolution starts. On rejection
    /// the reference is cleared and, unless the input was blank, the
    /// user-facing error is set.
    ///
    /// # Errors
    ///
    /// Returns the resolver's [`Rejection`] when the input is not recognized.
    pub fn submit(&mut self, raw: &str) -> Result<&ContentReference, Rejection> {
        self.error_message = None;

        match resolve(raw) {
            Ok(reference) => {
                tracing::debug!(reference = %reference, "submission resolved");
                Ok(self.reference.insert(reference))
            }
            Err(rejection) => {
                tracing::debug!(input = %raw.trim(), rejection = %rejection, "submission rejected");
                if !raw.trim().is_empty() {
                    self.error_message = Some(INVALID_INPUT_MESSAGE.to_string());
                }
                self.reference = None;
                Err(rejection)
            }
        }
    }

    /// Clears a pending error once the user edits the input.
    ///
    /// Returns `true` if there was an error to clear.
    pub fn input_changed(&mut self) -> bool {
        self.error_message.take().is_some()
    }

    /// Flips the theme and returns the new one.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Whether the display mode switch is meaningful right now.
    ///
    /// Chat is only available for live channels, so the switch is disabled
    /// while a VOD or clip is shown.
    #[must_use]
    pub fn can_toggle_display_mode(&self) -> bool {
        self.reference
            .as_ref()
            .map_or(true, |reference| reference.kind().supports_chat())
    }

    /// Flips the display mode unless a VOD or clip is shown.
    ///
    /// Returns `true` if the mode changed.
    pub fn toggle_display_mode(&mut self) -> bool {
        if !self.can_toggle_display_mode() {
            tracing::debug!(
                kind = ?self.reference.as_ref().map(ContentReference::kind),
                "display mode toggle ignored"
            );
            return false;
        }
        self.display_mode = self.display_mode.toggled();
        true
    }

    /// Records the detected page hostname.
    ///
    /// Returns `true` if it changed. Empty hostnames are ignored.
    pub fn hostname_detected(&mut self, hostname: &str) -> bool {
        if hostname.is_empty() || self.hostname.as_deref() == Some(hostname) {
            return false;
        }
        self.hostname = Some(hostname.to_string());
        true
    }

    /// Current rendering strategy for the player area.
    #[must_use]
    pub fn render_plan(&self) -> RenderPlan {
        RenderPlan::for_state(
            self.reference.as_ref(),
            self.display_mode,
            self.theme,
            self.hostname.as_deref(),
        )
    }

    #[must_use]
    pub fn reference_kind(&self) -> Option<ContentKind> {
        self.reference.as_ref().map(ContentReference::kind)
    }

    /// Computes the page view model from the current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> crate::ui::viewmodel::PageViewModel {
        use crate::ui::viewmodel::{HeaderInfo, ModeToggleInfo, PageViewModel, PlayerView};

        let player = match self.render_plan() {
            RenderPlan::Nothing => PlayerView::Empty,
            RenderPlan::DetectingEnvironment => PlayerView::Detecting,
            RenderPlan::Iframe(iframe) => PlayerView::Iframe {
                src: iframe.src,
                title: iframe.title.to_string(),
                parent: self.hostname.clone().unwrap_or_default(),
            },
            RenderPlan::FullEmbed(options) => PlayerView::Embed {
                options: options.to_json().to_string(),
                parent: self.hostname.clone().unwrap_or_default(),
            },
        };

        let enabled = self.can_toggle_display_mode();
        let title = if !enabled {
            "Chat is only available for live channels"
        } else if self.display_mode == DisplayMode::Minimal {
            "Show video with chat"
        } else {
            "Show video only"
        };

        PageViewModel {
            theme: self.theme,
            header: HeaderInfo::default(),
            error: self.error_message.clone(),
            mode_toggle: ModeToggleInfo {
                mode: self.display_mode,
                enabled,
                title: title.to_string(),
            },
            player,
        }
    }
}
