//! Content reference domain model.
//!
//! A [`ContentReference`] names one piece of playable content on the streaming
//! platform: a live channel, a VOD, or a clip. References are produced by the
//! resolver from user input, or read back from the page query string at startup.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of content a reference points at.
///
/// Each kind doubles as the query string key used to reflect the reference in
/// the address bar (`?channel=...`, `?video=...`, `?clip=...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// A live channel, identified by its handle.
    Channel,
    /// A past broadcast, identified by its numeric id.
    Video,
    /// A short clip, identified by an opaque slug.
    Clip,
}

impl ContentKind {
    /// Startup lookup order for query parameters.
    pub const PRIORITY: [Self; 3] = [Self::Channel, Self::Video, Self::Clip];

    /// Returns the query string key for this kind.
    #[must_use]
    pub const fn query_key(self) -> &'static str {
        match self {
            Self::Channel => "channel",
            Self::Video => "video",
            Self::Clip => "clip",
        }
    }

    /// Whether the chat-augmented display is meaningful for this kind.
    ///
    /// Only live channels have a chat to show next to the video.
    #[must_use]
    pub const fn supports_chat(self) -> bool {
        matches!(self, Self::Channel)
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.query_key())
    }
}

/// An immutable, classified reference to platform content.
///
/// The `id` is never empty. For videos it is stored without the provider's
/// `v` prefix; the prefix is re-added when playback URLs are built.
///
/// # Examples
///
/// ```
/// use ministream::domain::{ContentKind, ContentReference};
///
/// let reference = ContentReference::new(ContentKind::Video, "12345").unwrap();
/// assert_eq!(reference.query_pair(), ("video", "12345"));
/// assert!(ContentReference::new(ContentKind::Clip, "").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawReference")]
pub struct ContentReference {
    kind: ContentKind,
    id: String,
}

/// Unchecked wire form; deserialization goes through [`ContentReference::new`].
#[derive(Deserialize)]
struct RawReference {
    kind: ContentKind,
    id: String,
}

impl TryFrom<RawReference> for ContentReference {
    type Error = String;

    fn try_from(raw: RawReference) -> Result<Self, Self::Error> {
        let kind = raw.kind;
        Self::new(kind, raw.id).ok_or_else(|| format!("empty {kind} id"))
    }
}

impl ContentReference {
    /// Creates a reference, returning `None` if `id` is empty.
    #[must_use]
    pub fn new(kind: ContentKind, id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() {
            return None;
        }
        Some(Self { kind, id })
    }

    #[must_use]
    pub const fn kind(&self) -> ContentKind {
        self.kind
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the `(key, value)` pair reflected into the address bar.
    #[must_use]
    pub fn query_pair(&self) -> (&'static str, &str) {
        (self.kind.query_key(), &self.id)
    }
}

impl fmt::Display for ContentReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_id_is_refused() {
        assert!(ContentReference::new(ContentKind::Channel, "").is_none());
        assert!(ContentReference::new(ContentKind::Channel, String::new()).is_none());
    }

    #[test]
    fn query_pair_uses_kind_key() {
        let clip = ContentReference::new(ContentKind::Clip, "AbCdEf").unwrap();
        assert_eq!(clip.query_pair(), ("clip", "AbCdEf"));
        assert_eq!(clip.to_string(), "clip:AbCdEf");
    }

    #[test]
    fn only_channels_support_chat() {
        assert!(ContentKind::Channel.supports_chat());
        assert!(!ContentKind::Video.supports_chat());
        assert!(!ContentKind::Clip.supports_chat());
    }

    #[test]
    fn deserializing_empty_id_is_refused() {
        let err = serde_json::from_str::<ContentReference>(r#"{"kind":"channel","id":""}"#)
            .unwrap_err();
        assert!(err.to_string().contains("empty channel id"));
    }

    #[test]
    fn deserializing_valid_reference() {
        let clip = ContentReference::new(ContentKind::Clip, "AbCdEf").unwrap();
        let json = serde_json::to_string(&clip).unwrap();
        assert_eq!(json, r#"{"kind":"clip","id":"AbCdEf"}"#);
        assert_eq!(serde_json::from_str::<ContentReference>(&json).unwrap(), clip);
    }

    #[test]
    fn kind_serializes_as_query_key() {
        let json = serde_json::to_string(&ContentKind::Video).unwrap();
        assert_eq!(json, "\"video\"");
    }
}
