//! Theme and display mode switch renderers.

use crate::app::{DisplayMode, Theme};
use crate::ui::helpers::attr;
use crate::ui::viewmodel::ModeToggleInfo;

/// Renders the theme switch. The label names the theme a click switches to.
pub fn render_theme_toggle(theme: Theme) -> String {
    format!(
        "<button class=\"theme-toggle\"{}>{}</button>\n",
        attr("aria-label", "Toggle theme"),
        theme.toggled()
    )
}

/// Renders the display mode switch.
///
/// Shows the chat icon while in minimal mode and the video icon while in full
/// mode; disabled when the current content has no chat.
pub fn render_mode_toggle(toggle: &ModeToggleInfo) -> String {
    let icon = match toggle.mode {
        DisplayMode::Minimal => "chat",
        DisplayMode::Full => "video",
    };
    format!(
        "<button class=\"mode-toggle\" data-icon=\"{icon}\"{}{}{}></button>\n",
        attr("aria-label", "Toggle player mode"),
        attr("title", &toggle.title),
        if toggle.enabled { "" } else { " disabled" },
    )
}
