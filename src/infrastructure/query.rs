//! Query string reflection of the current content reference.
//!
//! The page address carries at most one of `channel`, `video` or `clip`. This
//! module reads the startup reference from a query string and builds the
//! address written back after every submission.

use crate::domain::{ContentKind, ContentReference};
use url::form_urlencoded;

/// Reads the startup reference from a query string.
///
/// Keys are checked in [`ContentKind::PRIORITY`] order (channel, then video,
/// then clip); the first key with a non-empty value wins. Values are taken as
/// they are, without resolver validation.
///
/// # Example
///
/// ```
/// use ministream::infrastructure::reference_from_query;
///
/// let reference = reference_from_query("?clip=Slug&video=999").unwrap();
/// assert_eq!(reference.query_pair(), ("video", "999"));
/// ```
#[must_use]
pub fn reference_from_query(search: &str) -> Option<ContentReference> {
    let query = search.strip_prefix('?').unwrap_or(search);
    let pairs: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect();

    ContentKind::PRIORITY.into_iter().find_map(|kind| {
        pairs
            .iter()
            .find(|(key, _)| key == kind.query_key())
            .and_then(|(_, value)| ContentReference::new(kind, value.as_str()))
    })
}

/// Encodes a reference as a query string without the leading `?`.
///
/// Returns an empty string when there is no reference.
#[must_use]
pub fn query_for(reference: Option<&ContentReference>) -> String {
    reference.map_or_else(String::new, |reference| {
        let (key, value) = reference.query_pair();
        form_urlencoded::Serializer::new(String::new())
            .append_pair(key, value)
            .finish()
    })
}

/// Builds the same-document address for a reference.
///
/// The result is `pathname?kind=id`, or the bare pathname when the reference
/// is cleared. No other parameters survive.
#[must_use]
pub fn address_for(pathname: &str, reference: Option<&ContentReference>) -> String {
    let query = query_for(reference);
    if query.is_empty() {
        pathname.to_string()
    } else {
        format!("{pathname}?{query}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_wins_over_video_and_clip() {
        let reference = reference_from_query("?clip=c&video=1&channel=someone").unwrap();
        assert_eq!(reference.kind(), ContentKind::Channel);
        assert_eq!(reference.id(), "someone");
    }

    #[test]
    fn empty_values_are_skipped() {
        let reference = reference_from_query("channel=&clip=Slug").unwrap();
        assert_eq!(reference.query_pair(), ("clip", "Slug"));
    }

    #[test]
    fn no_known_key_yields_none() {
        assert!(reference_from_query("").is_none());
        assert!(reference_from_query("?foo=bar").is_none());
    }

    #[test]
    fn values_are_not_validated() {
        let reference = reference_from_query("?video=not-a-number").unwrap();
        assert_eq!(reference.id(), "not-a-number");
    }

    #[test]
    fn address_has_single_key_or_none() {
        let reference = ContentReference::new(ContentKind::Video, "999").unwrap();
        assert_eq!(address_for("/", Some(&reference)), "/?video=999");
        assert_eq!(address_for("/app", None), "/app");
    }

    #[test]
    fn values_are_percent_encoded() {
        let reference = ContentReference::new(ContentKind::Clip, "a b&c").unwrap();
        assert_eq!(query_for(Some(&reference)), "clip=a+b%26c");
        let back = reference_from_query(&query_for(Some(&reference))).unwrap();
        assert_eq!(back, reference);
    }
}
