//! Input bar component renderer.
//!
//! Renders the text field the user pastes links or names into, and the error
//! line below it when the last submission was rejected. The field is marked
//! `aria-invalid` while the error is shown.

use crate::ui::helpers::{attr, escape_html};

/// Renders the input bar and the optional error message.
pub fn render_input_bar(error: Option<&str>) -> String {
    let mut bar = String::from("<form class=\"input-bar\">\n<input type=\"text\"");
    bar.push_str(&attr("placeholder", "Paste a Twitch channel, VOD or clip link"));
    if error.is_some() {
        bar.push_str(" aria-invalid=\"true\"");
    }
    bar.push_str(">\n<button type=\"submit\">Watch</button>\n</form>\n");

    if let Some(message) = error {
        bar.push_str(&format!("<p class=\"error\">{}</p>\n", escape_html(message)));
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_marks_field_invalid() {
        let bar = render_input_bar(Some("bad <input>"));
        assert!(bar.contains("aria-invalid=\"true\""));
        assert!(bar.contains("<p class=\"error\">bad &lt;input&gt;</p>"));
    }

    #[test]
    fn no_error_line_without_error() {
        let bar = render_input_bar(None);
        assert!(!bar.contains("aria-invalid"));
        assert!(!bar.contains("class=\"error\""));
    }
}
