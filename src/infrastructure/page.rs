//! Page location and history access.
//!
//! The controller never touches the browser directly. It reads the startup
//! address through [`Location`] and rewrites it through [`History`]. The
//! [`PageUrl`] type implements both over an in-memory URL and backs the
//! headless shell and the tests.

use crate::domain::{MiniStreamError, Result};
use url::Url;

/// Read access to the current page address.
pub trait Location {
    /// Path component, always starting with `/`.
    fn pathname(&self) -> String;

    /// Query string including the leading `?`, or empty.
    fn search(&self) -> String;

    /// Host name of the page, used as the embed parent domain.
    fn hostname(&self) -> String;
}

/// Non-navigating address bar updates.
pub trait History {
    /// Replaces the visible address with a same-document `address`
    /// (`/path?query`) without reloading or adding a history entry.
    fn replace_state(&mut self, address: &str);
}

/// In-memory page address.
///
/// # Example
///
/// ```
/// use ministream::infrastructure::{History, Location, PageUrl};
///
/// let mut page = PageUrl::parse("https://watch.example.com/?video=999").unwrap();
/// assert_eq!(page.search(), "?video=999");
/// page.replace_state("/?channel=someone");
/// assert_eq!(page.href(), "https://watch.example.com/?channel=someone");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageUrl {
    url: Url,
    replacements: usize,
}

impl PageUrl {
    /// Parses an absolute page address.
    ///
    /// # Errors
    ///
    /// Returns [`MiniStreamError::Config`] if `address` is not an absolute URL.
    pub fn parse(address: &str) -> Result<Self> {
        let url = Url::parse(address)
            .map_err(|e| MiniStreamError::Config(format!("invalid page location {address:?}: {e}")))?;
        Ok(Self { url, replacements: 0 })
    }

    /// Full address as shown in the address bar.
    #[must_use]
    pub fn href(&self) -> &str {
        self.url.as_str()
    }

    /// Number of `replace_state` calls applied so far.
    #[must_use]
    pub const fn replacements(&self) -> usize {
        self.replacements
    }
}

impl Location for PageUrl {
    fn pathname(&self) -> String {
        self.url.path().to_string()
    }

    fn search(&self) -> String {
        self.url
            .query()
            .filter(|query| !query.is_empty())
            .map(|query| format!("?{query}"))
            .unwrap_or_default()
    }

    fn hostname(&self) -> String {
        self.url.host_str().unwrap_or_default().to_string()
    }
}

impl History for PageUrl {
    fn replace_state(&mut self, address: &str) {
        let (path, query) = match address.split_once('?') {
            Some((path, query)) => (path, Some(query).filter(|q| !q.is_empty())),
            None => (address, None),
        };
        if !path.starts_with('/') {
            tracing::warn!(address = %address, "ignoring address that is not an absolute path");
            return;
        }

        // Only path and query change; scheme, host and port stay put even when
        // the path itself starts with `//`.
        let mut url = self.url.clone();
        url.set_path(path);
        url.set_query(query);
        url.set_fragment(None);

        tracing::debug!(from = %self.url, to = %url, "address replaced");
        self.url = url;
        self.replacements += 1;
    }
}
