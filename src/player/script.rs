//! One-shot loading of the third-party embed script.
//!
//! The full embed needs the provider's script, which must be injected into the
//! page exactly once no matter how many players ask for it. [`ScriptLoader`]
//! memoizes the first load as a [`Shared`] future: the first caller triggers
//! the injection and every caller, concurrent or later, awaits the same
//! completion. The outcome is kept, including failure; nothing is retried.
//!
//! # Example
//!
//! ```rust
//! use futures_util::future::{self, FutureExt, LocalBoxFuture};
//! use ministream::player::{LoadState, ScriptInjector, ScriptLoader};
//!
//! struct Inline;
//!
//! impl ScriptInjector for Inline {
//!     fn inject(&self, _url: &str) -> LocalBoxFuture<'static, Result<(), String>> {
//!         future::ready(Ok(())).boxed_local()
//!     }
//! }
//!
//! let loader = ScriptLoader::new(Inline, "https://embed.example/v1.js");
//! assert_eq!(loader.state(), LoadState::Idle);
//! futures::executor::block_on(loader.load()).unwrap();
//! assert_eq!(loader.state(), LoadState::Ready);
//! ```

use crate::domain::ScriptLoadError;
use futures_util::future::{FutureExt, LocalBoxFuture, Shared};
use std::cell::RefCell;

/// Default location of the provider's embed script.
pub const EMBED_SCRIPT_URL: &str = "https://embed.twitch.tv/embed/v1.js";

/// Memoized script load shared by all waiters.
pub type ScriptLoad = Shared<LocalBoxFuture<'static, Result<(), ScriptLoadError>>>;

/// Injects a script resource into the page.
///
/// Implementations append a `<script src=...>` element (or the headless
/// equivalent) and resolve once the resource has loaded or failed. The loader
/// guarantees `inject` is called at most once.
pub trait ScriptInjector {
    fn inject(&self, url: &str) -> LocalBoxFuture<'static, Result<(), String>>;
}

/// Observable progress of the script load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Nobody asked for the script yet.
    Idle,
    /// Injected, not settled.
    Loading,
    /// Loaded; the embed constructor is available.
    Ready,
    /// Failed; stays failed.
    Failed,
}

/// Load-on-demand script loader with coalesced waiters.
pub struct ScriptLoader<I> {
    injector: I,
    url: String,
    load: RefCell<Option<ScriptLoad>>,
}

impl<I: ScriptInjector> ScriptLoader<I> {
    pub fn new(injector: I, url: impl Into<String>) -> Self {
        Self {
            injector,
            url: url.into(),
            load: RefCell::new(None),
        }
    }

    /// Returns the shared load, starting it on first use.
    ///
    /// Cloning a [`ScriptLoad`] is cheap; all clones observe the same result.
    pub fn load(&self) -> ScriptLoad {
        let mut slot = self.load.borrow_mut();
        if let Some(load) = slot.as_ref() {
            tracing::trace!(url = %self.url, "joining existing script load");
            return load.clone();
        }

        tracing::debug!(url = %self.url, "injecting embed script");
        let url = self.url.clone();
        let injection = self.injector.inject(&url);
        let load = async move {
            match injection.await {
                Ok(()) => {
                    tracing::debug!(url = %url, "embed script loaded");
                    Ok(())
                }
                Err(reason) => Err(ScriptLoadError { url, reason }),
            }
        }
        .boxed_local()
        .shared();

        *slot = Some(load.clone());
        load
    }

    #[must_use]
    pub fn state(&self) -> LoadState {
        match self.load.borrow().as_ref() {
            None => LoadState::Idle,
            Some(load) => match load.peek() {
                None => LoadState::Loading,
                Some(Ok(())) => LoadState::Ready,
                Some(Err(_)) => LoadState::Failed,
            },
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub const fn injector(&self) -> &I {
        &self.injector
    }
}

impl<I> std::fmt::Debug for ScriptLoader<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptLoader")
            .field("url", &self.url)
            .field("started", &self.load.borrow().is_some())
            .finish_non_exhaustive()
    }
}
