//! In-process host implementations for running without a browser.
//!
//! The headless shell binary and the integration tests use these: the script
//! "loads" instantly (or fails, when configured unavailable) and the embed
//! container records the options of the instance attached to it.

use crate::domain::{MiniStreamError, Result};
use crate::player::{EmbedContainer, EmbedHandle, EmbedOptions, ScriptInjector};
use futures_util::future::{self, FutureExt, LocalBoxFuture};
use std::cell::Cell;

/// Script injector that settles immediately.
#[derive(Debug, Default)]
pub struct HeadlessInjector {
    available: bool,
    injections: Cell<usize>,
}

impl HeadlessInjector {
    #[must_use]
    pub const fn new(available: bool) -> Self {
        Self {
            available,
            injections: Cell::new(0),
        }
    }

    /// Number of scripts injected so far.
    #[must_use]
    pub fn injections(&self) -> usize {
        self.injections.get()
    }
}

impl ScriptInjector for HeadlessInjector {
    fn inject(&self, url: &str) -> LocalBoxFuture<'static, std::result::Result<(), String>> {
        self.injections.set(self.injections.get() + 1);
        let outcome = if self.available {
            Ok(())
        } else {
            Err(format!("{url} is unavailable in headless mode"))
        };
        future::ready(outcome).boxed_local()
    }
}

/// Embed container holding at most the options of one mounted instance.
#[derive(Debug, Default)]
pub struct HeadlessContainer {
    mounted: Option<EmbedOptions>,
    next_instance: u64,
    refuse_mounts: bool,
}

impl HeadlessContainer {
    /// A container whose embed constructor always fails.
    #[must_use]
    pub fn refusing() -> Self {
        Self {
            refuse_mounts: true,
            ..Self::default()
        }
    }

    /// Options of the attached instance, if any.
    #[must_use]
    pub const fn mounted(&self) -> Option<&EmbedOptions> {
        self.mounted.as_ref()
    }

    /// Number of instances currently attached: zero or one.
    #[must_use]
    pub const fn attached(&self) -> usize {
        if self.mounted.is_some() {
            1
        } else {
            0
        }
    }
}

impl EmbedContainer for HeadlessContainer {
    fn clear(&mut self) {
        self.mounted = None;
    }

    fn mount(&mut self, options: &EmbedOptions) -> Result<EmbedHandle> {
        if self.refuse_mounts {
            return Err(MiniStreamError::Embed("embed constructor unavailable".to_string()));
        }
        if self.mounted.is_some() {
            return Err(MiniStreamError::Embed("container already holds an instance".to_string()));
        }
        self.next_instance += 1;
        self.mounted = Some(options.clone());
        Ok(EmbedHandle::new(self.next_instance, options.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Theme;
    use crate::domain::{ContentKind, ContentReference};

    fn options() -> EmbedOptions {
        let reference = ContentReference::new(ContentKind::Channel, "someone").unwrap();
        EmbedOptions::for_reference(&reference, Theme::Dark, "localhost")
    }

    #[test]
    fn injector_counts_and_fails_when_unavailable() {
        let injector = HeadlessInjector::new(false);
        let outcome = futures::executor::block_on(injector.inject("https://embed.test/v1.js"));
        assert_eq!(
            outcome,
            Err("https://embed.test/v1.js is unavailable in headless mode".to_string())
        );
        assert_eq!(injector.injections(), 1);
    }

    #[test]
    fn container_refuses_second_instance_until_cleared() {
        let mut container = HeadlessContainer::default();
        let first = container.mount(&options()).unwrap();
        assert!(container.mount(&options()).is_err());

        container.clear();
        let second = container.mount(&options()).unwrap();
        assert_ne!(first.instance(), second.instance());
        assert_eq!(container.attached(), 1);
    }
}
