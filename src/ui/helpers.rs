//! Shared rendering utilities.
//!
//! Every piece of user-influenced text reaches the markup through
//! [`escape_html`]; the content id comes straight from the address bar at
//! startup and is never validated.

/// Escapes text for use in element content and double- or single-quoted
/// attribute values.
///
/// # Example
///
/// ```rust
/// use ministream::ui::helpers::escape_html;
///
/// assert_eq!(escape_html("<a href='x'>"), "&lt;a href=&#39;x&#39;&gt;");
/// ```
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders a ` name="value"` attribute with the value escaped.
#[must_use]
pub fn attr(name: &str, value: &str) -> String {
    format!(" {name}=\"{}\"", escape_html(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(escape_html("someuser_123"), "someuser_123");
    }

    #[test]
    fn markup_and_quotes_are_escaped() {
        assert_eq!(
            escape_html(r#"a&b "c" <d>"#),
            "a&amp;b &quot;c&quot; &lt;d&gt;"
        );
    }

    #[test]
    fn attribute_value_cannot_break_out() {
        assert_eq!(attr("title", "x\" onload=\"y"), " title=\"x&quot; onload=&quot;y\"");
    }
}
