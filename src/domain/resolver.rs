//! Classification of free-form user input into content references.
//!
//! [`resolve`] accepts whatever the user pasted into the input bar: a bare
//! channel handle, a full platform URL, or a URL missing its scheme. It either
//! produces a [`ContentReference`] or a [`Rejection`] describing why the input
//! was refused.
//!
//! # Rules
//!
//! Evaluated in order, first match wins:
//!
//! 1. Empty (after trimming) input is [`Rejection::Empty`].
//! 2. Input with no `.` and no `/` is a bare handle and must match
//!    `^[A-Za-z0-9_]{4,25}$`.
//! 3. Anything else is treated as a URL; `https://` is prepended when no
//!    scheme is present.
//! 4. Clip-subdomain URLs with a single path segment are clips. Main-domain
//!    URLs are matched against the VOD, channel-clip and channel path shapes,
//!    the channel shape last since it is the most generic.
//!
//! # Example
//!
//! ```
//! use ministream::domain::{resolve, ContentKind};
//!
//! let reference = resolve("twitch.tv/videos/v12345").unwrap();
//! assert_eq!(reference.kind(), ContentKind::Video);
//! assert_eq!(reference.id(), "12345");
//! ```

use super::reference::{ContentKind, ContentReference};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;
use url::Url;

/// Host fragment identifying the clip subdomain.
pub const CLIP_HOST: &str = "clips.twitch.tv";

/// Host fragment identifying the main platform domain.
pub const PLATFORM_HOST: &str = "twitch.tv";

/// Scheme prepended to URL-like input that has none.
const DEFAULT_SCHEME: &str = "https://";

static HANDLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]{4,25}$").expect("handle pattern is valid"));

static VIDEO_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v?\d+$").expect("video id pattern is valid"));

static SCHEME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").expect("scheme pattern is valid")
});

/// Reason an input could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    /// Nothing but whitespace was submitted. Treated as "clear".
    #[error("input is empty")]
    Empty,

    /// Input looked like a bare handle but is not 4-25 word characters.
    #[error("not a valid channel handle")]
    InvalidHandle,

    /// Input looked like a URL but could not be parsed as one.
    #[error("not a parsable URL")]
    UnparsableUrl,

    /// Platform URL whose path is not a channel, VOD or clip.
    #[error("unrecognized platform path")]
    UnrecognizedPath,

    /// URL on a host other than the platform.
    #[error("unsupported host")]
    UnsupportedHost,
}

/// Resolves raw user input into a content reference.
///
/// # Errors
///
/// Returns a [`Rejection`] when the input is empty, is not a valid handle,
/// cannot be parsed as a URL, or does not point at platform content.
pub fn resolve(input: &str) -> Result<ContentReference, Rejection> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Rejection::Empty);
    }

    if !trimmed.contains('.') && !trimmed.contains('/') {
        return resolve_handle(trimmed);
    }

    let candidate = if SCHEME_PATTERN.is_match(trimmed) {
        trimmed.to_string()
    } else {
        format!("{DEFAULT_SCHEME}{trimmed}")
    };

    let parsed = Url::parse(&candidate).map_err(|e| {
        tracing::debug!(input = %trimmed, error = %e, "input is not a parsable url");
        Rejection::UnparsableUrl
    })?;

    resolve_url(&parsed)
}

fn resolve_handle(handle: &str) -> Result<ContentReference, Rejection> {
    if !HANDLE_PATTERN.is_match(handle) {
        return Err(Rejection::InvalidHandle);
    }
    ContentReference::new(ContentKind::Channel, handle).ok_or(Rejection::InvalidHandle)
}

fn resolve_url(url: &Url) -> Result<ContentReference, Rejection> {
    let host = url.host_str().map(str::to_lowercase).unwrap_or_default();
    let segments: Vec<&str> = url
        .path_segments()
        .map(|parts| parts.filter(|part| !part.is_empty()).collect())
        .unwrap_or_default();

    if host.contains(CLIP_HOST) {
        if let [slug] = segments.as_slice() {
            return reference(ContentKind::Clip, slug);
        }
    }

    if !host.contains(PLATFORM_HOST) {
        return Err(Rejection::UnsupportedHost);
    }

    if let ["videos", video_id, ..] = segments.as_slice() {
        let video_id: &str = video_id;
        if VIDEO_ID_PATTERN.is_match(video_id) {
            let id = video_id.strip_prefix('v').unwrap_or(video_id);
            return reference(ContentKind::Video, id);
        }
    }

    match segments.as_slice() {
        [_, "clip", slug] => reference(ContentKind::Clip, slug),
        [channel] if *channel != "videos" && *channel != "clip" => {
            reference(ContentKind::Channel, channel)
        }
        _ => Err(Rejection::UnrecognizedPath),
    }
}

fn reference(kind: ContentKind, id: &str) -> Result<ContentReference, Rejection> {
    ContentReference::new(kind, id).ok_or(Rejection::UnrecognizedPath)
}
