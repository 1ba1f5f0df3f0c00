//! Runtime glue between the page host and the library.
//!
//! [`Shell`] owns everything with a lifetime longer than one event: the view
//! state, the page address, the player adapter with its container and the
//! script loader. It maps host happenings to [`Event`]s, runs them through
//! [`handle_event`], and executes the returned [`Action`]s in order.
//!
//! # Lifecycle
//!
//! 1. [`Shell::start`]: seed state from the startup query, then record the
//!    page hostname
//! 2. [`Shell::dispatch`]: one call per user interaction
//! 3. [`Shell::settle_pending`]: await the embed script for every full embed
//!    requested so far and mount the one that is still current
//! 4. [`Shell::render`]: page markup for the current state
//!
//! A full embed requested by a reconcile starts the script load immediately.
//! Several full embeds may be queued before anything settles; all of them wait
//! on the same shared load, and only the newest generation mounts.
//!
//! # Example
//!
//! ```rust
//! use ministream::app::{AppState, Event};
//! use ministream::infrastructure::PageUrl;
//! use ministream::player::{ScriptLoader, EMBED_SCRIPT_URL};
//! use ministream::shell::headless::{HeadlessContainer, HeadlessInjector};
//! use ministream::shell::Shell;
//!
//! let page = PageUrl::parse("https://watch.example.com/")?;
//! let loader = ScriptLoader::new(HeadlessInjector::new(true), EMBED_SCRIPT_URL);
//! let mut shell = Shell::new(AppState::default(), page, loader, HeadlessContainer::default());
//!
//! shell.start()?;
//! shell.dispatch(&Event::Submit("someuser".into()))?;
//! assert_eq!(shell.page().href(), "https://watch.example.com/?channel=someuser");
//! # Ok::<(), ministream::MiniStreamError>(())
//! ```

pub mod headless;

use crate::app::{handle_event, Action, AppState, Event, Theme};
use crate::domain::Result;
use crate::infrastructure::{address_for, History, Location};
use crate::player::{EmbedContainer, PendingEmbed, PlayerAdapter, ScriptInjector, ScriptLoad, ScriptLoader};
use futures_util::future::join_all;

/// Page runtime owning the host, the view state and the player.
pub struct Shell<P, I, C> {
    state: AppState,
    page: P,
    adapter: PlayerAdapter<C>,
    loader: ScriptLoader<I>,
    pending: Vec<(PendingEmbed, ScriptLoad)>,
    document_theme: Option<Theme>,
}

impl<P, I, C> Shell<P, I, C>
where
    P: Location + History,
    I: ScriptInjector,
    C: EmbedContainer,
{
    pub fn new(state: AppState, page: P, loader: ScriptLoader<I>, container: C) -> Self {
        Self {
            state,
            page,
            adapter: PlayerAdapter::new(container),
            loader,
            pending: Vec::new(),
            document_theme: None,
        }
    }

    /// Runs the startup sequence: query seeding, then hostname detection.
    ///
    /// # Errors
    ///
    /// Propagates event handling errors.
    pub fn start(&mut self) -> Result<bool> {
        let _span = tracing::debug_span!("shell_start").entered();

        let search = self.page.search();
        let loaded = self.dispatch(&Event::PageLoaded { search })?;
        let hostname = self.page.hostname();
        let detected = self.dispatch(&Event::HostnameDetected(hostname))?;
        Ok(loaded || detected)
    }

    /// Handles one event and executes the resulting actions.
    ///
    /// Returns whether the page should re-render.
    ///
    /// # Errors
    ///
    /// Propagates event handling errors. Actions are only executed on success.
    pub fn dispatch(&mut self, event: &Event) -> Result<bool> {
        let (should_render, actions) = handle_event(&mut self.state, event)?;
        tracing::debug!(
            action_count = actions.len(),
            should_render = should_render,
            "event handled successfully"
        );
        for action in actions {
            self.execute_action(action);
        }
        Ok(should_render)
    }

    fn execute_action(&mut self, action: Action) {
        match action {
            Action::ReplaceAddress(reference) => {
                let address = address_for(&self.page.pathname(), reference.as_ref());
                tracing::debug!(address = %address, "replacing address");
                self.page.replace_state(&address);
            }
            Action::ApplyTheme(theme) => {
                tracing::debug!(theme = %theme, "applying document theme");
                self.document_theme = Some(theme);
            }
            Action::ReconcilePlayer(plan) => {
                if let Some(pending) = self.adapter.reconcile(plan) {
                    let load = self.loader.load();
                    self.pending.push((pending, load));
                }
            }
        }
    }

    /// Waits for the script load behind every queued full embed and settles
    /// them in order.
    ///
    /// Returns the number of instances mounted, which is at most one.
    pub async fn settle_pending(&mut self) -> usize {
        if self.pending.is_empty() {
            return 0;
        }

        let (embeds, loads): (Vec<PendingEmbed>, Vec<ScriptLoad>) =
            std::mem::take(&mut self.pending).into_iter().unzip();
        tracing::debug!(pending = embeds.len(), "settling pending embeds");

        let outcomes = join_all(loads).await;

        let mut mounted = 0;
        for (pending, outcome) in embeds.into_iter().zip(outcomes) {
            if self.adapter.settle(pending, outcome) {
                mounted += 1;
            }
        }
        mounted
    }

    /// Page markup for the current state.
    #[must_use]
    pub fn render(&self) -> String {
        crate::ui::render(&self.state)
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub const fn page(&self) -> &P {
        &self.page
    }

    #[must_use]
    pub const fn adapter(&self) -> &PlayerAdapter<C> {
        &self.adapter
    }

    #[must_use]
    pub const fn loader(&self) -> &ScriptLoader<I> {
        &self.loader
    }

    /// Theme last applied to the document root, if any.
    #[must_use]
    pub const fn document_theme(&self) -> Option<Theme> {
        self.document_theme
    }

    /// Number of full embeds waiting for the script load.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl<P, I, C> std::fmt::Debug for Shell<P, I, C>
where
    P: std::fmt::Debug,
    C: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shell")
            .field("state", &self.state)
            .field("page", &self.page)
            .field("adapter", &self.adapter)
            .field("loader", &self.loader)
            .field("pending", &self.pending.len())
            .field("document_theme", &self.document_theme)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::headless::{HeadlessContainer, HeadlessInjector};
    use super::*;
    use crate::app::DisplayMode;
    use crate::infrastructure::PageUrl;
    use crate::player::{LoadState, RenderPlan};
    use futures::executor::block_on;

    type TestShell = Shell<PageUrl, HeadlessInjector, HeadlessContainer>;

    fn shell(address: &str, script_available: bool) -> TestShell {
        let page = PageUrl::parse(address).unwrap();
        let loader = ScriptLoader::new(HeadlessInjector::new(script_available), "https://embed.test/v1.js");
        Shell::new(AppState::default(), page, loader, HeadlessContainer::default())
    }

    #[test]
    fn start_does_not_touch_address() {
        let mut shell = shell("https://watch.example.com/?video=999", true);
        shell.start().unwrap();

        assert_eq!(shell.page().href(), "https://watch.example.com/?video=999");
        assert_eq!(shell.page().replacements(), 0);
        assert_eq!(shell.document_theme(), Some(Theme::Light));
        assert!(matches!(shell.adapter().plan(), RenderPlan::Iframe(_)));
    }

    #[test]
    fn rejected_submission_clears_query() {
        let mut shell = shell("https://watch.example.com/?channel=someone", true);
        shell.start().unwrap();
        shell.dispatch(&Event::Submit("not a url!! ".into())).unwrap();

        assert_eq!(shell.page().href(), "https://watch.example.com/");
        assert_eq!(shell.adapter().plan(), &RenderPlan::Nothing);
    }

    #[test]
    fn iframe_plans_never_load_script() {
        let mut shell = shell("https://watch.example.com/", true);
        shell.start().unwrap();
        shell.dispatch(&Event::Submit("clips.twitch.tv/Slug".into())).unwrap();

        assert_eq!(shell.pending_count(), 0);
        assert_eq!(shell.loader().state(), LoadState::Idle);
        assert_eq!(block_on(shell.settle_pending()), 0);
    }

    #[test]
    fn full_embed_mounts_once_script_settles() {
        let mut shell = shell("https://watch.example.com/?channel=someone", true);
        shell.start().unwrap();
        shell.dispatch(&Event::ToggleDisplayMode).unwrap();
        assert_eq!(shell.state().display_mode, DisplayMode::Full);
        assert_eq!(shell.pending_count(), 1);

        assert_eq!(block_on(shell.settle_pending()), 1);
        assert_eq!(shell.loader().state(), LoadState::Ready);
        assert_eq!(shell.adapter().container().attached(), 1);
    }

    #[test]
    fn superseded_embeds_do_not_mount() {
        let mut shell = shell("https://watch.example.com/?channel=someone", true);
        shell.start().unwrap();
        shell.dispatch(&Event::ToggleDisplayMode).unwrap();
        shell.dispatch(&Event::ToggleTheme).unwrap();
        shell.dispatch(&Event::Submit("otherchannel".into())).unwrap();
        assert_eq!(shell.pending_count(), 3);

        assert_eq!(block_on(shell.settle_pending()), 1);
        let container = shell.adapter().container();
        assert_eq!(container.attached(), 1);
        assert_eq!(shell.loader().injector().injections(), 1);

        let handle = shell.adapter().handle().unwrap();
        assert_eq!(handle.options().channel.as_deref(), Some("otherchannel"));
    }

    #[test]
    fn mode_toggle_ignored_for_vods() {
        let mut shell = shell("https://watch.example.com/?video=999", true);
        shell.start().unwrap();
        assert!(!shell.dispatch(&Event::ToggleDisplayMode).unwrap());
        assert_eq!(shell.pending_count(), 0);
    }

    #[test]
    fn failed_script_leaves_container_empty() {
        let mut shell = shell("https://watch.example.com/?channel=someone", false);
        shell.start().unwrap();
        shell.dispatch(&Event::ToggleDisplayMode).unwrap();

        assert_eq!(block_on(shell.settle_pending()), 0);
        assert_eq!(shell.loader().state(), LoadState::Failed);
        assert_eq!(shell.adapter().container().attached(), 0);
    }
}
