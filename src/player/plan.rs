//! Rendering strategy selection.
//!
//! [`RenderPlan::for_state`] implements the player decision table: given the
//! current reference, display mode, theme and detected hostname it picks one
//! of nothing, an environment-detection placeholder, a lightweight iframe, or
//! the full interactive embed.
//!
//! | reference | mode    | plan                                  |
//! |-----------|---------|---------------------------------------|
//! | none      | any     | nothing                               |
//! | clip      | any     | iframe, clip endpoint                 |
//! | channel   | minimal | iframe, minimal player                |
//! | channel   | full    | full embed, video with chat           |
//! | video     | minimal | iframe, minimal player (`v` prefixed) |
//! | video     | full    | full embed, video only                |
//!
//! Any plan that would embed something turns into
//! [`RenderPlan::DetectingEnvironment`] while the hostname is unknown, since
//! the provider rejects requests with an empty parent domain.

use crate::app::modes::{DisplayMode, Theme};
use crate::domain::{ContentKind, ContentReference};
use serde::Serialize;
use url::form_urlencoded;

/// Minimal player endpoint for channels and VODs.
pub const PLAYER_ENDPOINT: &str = "https://player.twitch.tv/";

/// Clip embed endpoint.
pub const CLIP_ENDPOINT: &str = "https://clips.twitch.tv/embed";

/// Prefix the provider expects in front of numeric VOD ids.
pub const VIDEO_ID_PREFIX: &str = "v";

/// Layout requested from the full embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmbedLayout {
    /// Video only.
    #[serde(rename = "video")]
    Video,
    /// Video with the chat panel beside it.
    #[serde(rename = "video-with-chat")]
    VideoWithChat,
}

/// Options passed to the embed constructor.
///
/// Serializes to the JSON object the third-party `Embed` constructor expects.
/// Exactly one of `channel` and `video` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedOptions {
    pub width: &'static str,
    pub height: &'static str,
    /// Allowlisted parent domains; always the page hostname.
    pub parent: Vec<String>,
    pub autoplay: bool,
    pub muted: bool,
    pub layout: EmbedLayout,
    pub theme: Theme,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
}

impl EmbedOptions {
    /// Options for a channel or VOD. Clips have no full embed and never get here.
    #[must_use]
    pub(crate) fn for_reference(reference: &ContentReference, theme: Theme, hostname: &str) -> Self {
        let (layout, channel, video) = match reference.kind() {
            ContentKind::Channel => (
                EmbedLayout::VideoWithChat,
                Some(reference.id().to_string()),
                None,
            ),
            ContentKind::Video | ContentKind::Clip => {
                (EmbedLayout::Video, None, Some(reference.id().to_string()))
            }
        };

        Self {
            width: "100%",
            height: "100%",
            parent: vec![hostname.to_string()],
            autoplay: true,
            muted: false,
            layout,
            theme,
            channel,
            video,
        }
    }

    /// JSON form handed to the embed constructor.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// A lightweight iframe player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IframePlayer {
    pub src: String,
    pub title: &'static str,
}

/// What the player area should show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RenderPlan {
    /// No reference: render nothing.
    #[default]
    Nothing,
    /// A reference exists but the hostname is still being detected.
    DetectingEnvironment,
    /// Direct iframe to a provider endpoint, no script required.
    Iframe(IframePlayer),
    /// Full interactive embed, requires the embed script.
    FullEmbed(EmbedOptions),
}

impl RenderPlan {
    /// Selects the rendering strategy for the given inputs.
    ///
    /// # Example
    ///
    /// ```
    /// use ministream::app::modes::{DisplayMode, Theme};
    /// use ministream::domain::resolve;
    /// use ministream::player::RenderPlan;
    ///
    /// let clip = resolve("https://clips.twitch.tv/AbCdEf").unwrap();
    /// let plan = RenderPlan::for_state(Some(&clip), DisplayMode::Full, Theme::Dark, Some("localhost"));
    /// assert!(matches!(plan, RenderPlan::Iframe(_)));
    /// ```
    #[must_use]
    pub fn for_state(
        reference: Option<&ContentReference>,
        mode: DisplayMode,
        theme: Theme,
        hostname: Option<&str>,
    ) -> Self {
        let Some(reference) = reference else {
            return Self::Nothing;
        };
        let Some(hostname) = hostname.filter(|host| !host.is_empty()) else {
            return Self::DetectingEnvironment;
        };

        match (reference.kind(), mode) {
            (ContentKind::Clip, _) => Self::Iframe(IframePlayer {
                src: clip_embed_url(reference.id(), hostname),
                title: "Twitch Clip Player",
            }),
            (ContentKind::Channel | ContentKind::Video, DisplayMode::Minimal) => {
                Self::Iframe(IframePlayer {
                    src: minimal_player_url(reference, hostname),
                    title: "Twitch Player",
                })
            }
            (ContentKind::Channel | ContentKind::Video, DisplayMode::Full) => {
                Self::FullEmbed(EmbedOptions::for_reference(reference, theme, hostname))
            }
        }
    }

    #[must_use]
    pub const fn needs_script(&self) -> bool {
        matches!(self, Self::FullEmbed(_))
    }
}

/// Builds the minimal player URL for a channel or VOD. Clips are served by
/// the clip endpoint.
///
/// VOD ids get the provider prefix re-added.
#[must_use]
pub(crate) fn minimal_player_url(reference: &ContentReference, hostname: &str) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    match reference.kind() {
        ContentKind::Video => {
            query.append_pair("video", &format!("{VIDEO_ID_PREFIX}{}", reference.id()));
        }
        ContentKind::Channel => {
            query.append_pair("channel", reference.id());
        }
        ContentKind::Clip => return clip_embed_url(reference.id(), hostname),
    }
    let query = query
        .append_pair("parent", hostname)
        .append_pair("autoplay", "true")
        .append_pair("muted", "false")
        .finish();
    format!("{PLAYER_ENDPOINT}?{query}")
}

/// Builds the clip embed URL.
#[must_use]
pub fn clip_embed_url(slug: &str, hostname: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("clip", slug)
        .append_pair("parent", hostname)
        .append_pair("autoplay", "true")
        .finish();
    format!("{CLIP_ENDPOINT}?{query}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(kind: ContentKind, id: &str) -> ContentReference {
        ContentReference::new(kind, id).unwrap()
    }

    #[test]
    fn nothing_without_reference() {
        let plan = RenderPlan::for_state(None, DisplayMode::Full, Theme::Light, None);
        assert_eq!(plan, RenderPlan::Nothing);
    }

    #[test]
    fn placeholder_until_hostname_known() {
        let channel = reference(ContentKind::Channel, "someone");
        for host in [None, Some("")] {
            let plan = RenderPlan::for_state(Some(&channel), DisplayMode::Minimal, Theme::Light, host);
            assert_eq!(plan, RenderPlan::DetectingEnvironment);
        }
    }

    #[test]
    fn clips_always_use_iframe() {
        let clip = reference(ContentKind::Clip, "AbCdEf");
        for mode in [DisplayMode::Minimal, DisplayMode::Full] {
            let plan = RenderPlan::for_state(Some(&clip), mode, Theme::Light, Some("example.com"));
            assert_eq!(
                plan,
                RenderPlan::Iframe(IframePlayer {
                    src: "https://clips.twitch.tv/embed?clip=AbCdEf&parent=example.com&autoplay=true"
                        .to_string(),
                    title: "Twitch Clip Player",
                })
            );
        }
    }

    #[test]
    fn minimal_url_for_clip_uses_clip_endpoint() {
        let clip = reference(ContentKind::Clip, "AbCdEf");
        let src = minimal_player_url(&clip, "example.com");
        assert_eq!(src, clip_embed_url("AbCdEf", "example.com"));
        assert!(!src.contains("channel="));
    }

    #[test]
    fn minimal_vod_readds_prefix() {
        let video = reference(ContentKind::Video, "12345");
        let RenderPlan::Iframe(iframe) =
            RenderPlan::for_state(Some(&video), DisplayMode::Minimal, Theme::Light, Some("localhost"))
        else {
            panic!("expected iframe");
        };
        assert_eq!(
            iframe.src,
            "https://player.twitch.tv/?video=v12345&parent=localhost&autoplay=true&muted=false"
        );
    }

    #[test]
    fn minimal_channel_iframe() {
        let channel = reference(ContentKind::Channel, "someone");
        let RenderPlan::Iframe(iframe) =
            RenderPlan::for_state(Some(&channel), DisplayMode::Minimal, Theme::Dark, Some("localhost"))
        else {
            panic!("expected iframe");
        };
        assert!(iframe.src.starts_with("https://player.twitch.tv/?channel=someone&parent=localhost"));
    }

    #[test]
    fn full_channel_embeds_with_chat() {
        let channel = reference(ContentKind::Channel, "someone");
        let plan = RenderPlan::for_state(Some(&channel), DisplayMode::Full, Theme::Dark, Some("localhost"));
        let RenderPlan::FullEmbed(options) = plan else {
            panic!("expected full embed");
        };
        assert_eq!(options.layout, EmbedLayout::VideoWithChat);
        assert_eq!(
            options.to_json(),
            serde_json::json!({
                "width": "100%",
                "height": "100%",
                "parent": ["localhost"],
                "autoplay": true,
                "muted": false,
                "layout": "video-with-chat",
                "theme": "dark",
                "channel": "someone",
            })
        );
    }

    #[test]
    fn full_vod_embeds_video_only() {
        let video = reference(ContentKind::Video, "999");
        let plan = RenderPlan::for_state(Some(&video), DisplayMode::Full, Theme::Light, Some("localhost"));
        assert!(plan.needs_script());
        let RenderPlan::FullEmbed(options) = plan else {
            panic!("expected full embed");
        };
        assert_eq!(options.layout, EmbedLayout::Video);
        assert_eq!(options.video.as_deref(), Some("999"));
        assert!(options.channel.is_none());
    }
}
