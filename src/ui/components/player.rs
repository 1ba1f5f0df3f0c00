//! Player area renderer.
//!
//! The player area has four shapes: absent, a "detecting environment"
//! placeholder while the hostname is unknown, an iframe, or the container the
//! full embed is mounted into. The last two are followed by a diagnostics
//! line naming the parent domain sent to the provider.

use crate::ui::helpers::{attr, escape_html};
use crate::ui::viewmodel::PlayerView;

/// Element id of the container the full embed is attached to.
pub const EMBED_CONTAINER_ID: &str = "twitch-embed";

const IFRAME_PERMISSIONS: &str = "accelerometer; autoplay; clipboard-write; encrypted-media; \
                                  gyroscope; picture-in-picture; web-share";

/// Renders the player area.
pub fn render_player(player: &PlayerView) -> String {
    match player {
        PlayerView::Empty => String::new(),
        PlayerView::Detecting => "<section class=\"player placeholder\">\n\
             <p>Detecting environment...</p>\n\
             <p class=\"diagnostics\"><strong>Diagnostic Info:</strong> Waiting for parent domain...</p>\n\
             </section>\n"
            .to_string(),
        PlayerView::Iframe { src, title, parent } => format!(
            "<section class=\"player\">\n<iframe{}{} frameborder=\"0\"{} allowfullscreen></iframe>\n{}</section>\n",
            attr("src", src),
            attr("title", title),
            attr("allow", IFRAME_PERMISSIONS),
            render_diagnostics(parent)
        ),
        PlayerView::Embed { options, parent } => format!(
            "<section class=\"player\">\n<div{}{}></div>\n{}</section>\n",
            attr("id", EMBED_CONTAINER_ID),
            attr("data-embed-options", options),
            render_diagnostics(parent)
        ),
    }
}

fn render_diagnostics(parent: &str) -> String {
    format!(
        "<p class=\"diagnostics\"><strong>Diagnostic Info:</strong> Attempting to embed for parent domain: <code>{}</code></p>\n",
        escape_html(parent)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_renders_nothing() {
        assert!(render_player(&PlayerView::Empty).is_empty());
    }

    #[test]
    fn placeholder_waits_for_parent() {
        let markup = render_player(&PlayerView::Detecting);
        assert!(markup.contains("Detecting environment..."));
        assert!(markup.contains("Waiting for parent domain..."));
    }

    #[test]
    fn iframe_escapes_query_separators() {
        let markup = render_player(&PlayerView::Iframe {
            src: "https://clips.twitch.tv/embed?clip=A&parent=localhost".into(),
            title: "Twitch Clip Player".into(),
            parent: "localhost".into(),
        });
        assert!(markup.contains("src=\"https://clips.twitch.tv/embed?clip=A&amp;parent=localhost\""));
        assert!(markup.contains("<code>localhost</code>"));
    }

    #[test]
    fn embed_container_carries_options() {
        let markup = render_player(&PlayerView::Embed {
            options: r#"{"channel":"someone"}"#.into(),
            parent: "localhost".into(),
        });
        assert!(markup.contains("id=\"twitch-embed\""));
        assert!(markup.contains("data-embed-options=\"{&quot;channel&quot;:&quot;someone&quot;}\""));
    }
}
