//! Embed instance ownership and lifecycle.
//!
//! The page has exactly one embed container. [`PlayerAdapter`] owns it together
//! with the handle of the instance currently attached to it, and enforces the
//! lifecycle rules:
//!
//! - every [`reconcile`](PlayerAdapter::reconcile) disposes the current
//!   instance before anything else happens;
//! - a full embed is only constructed once the script load settles, and only
//!   if no newer reconcile happened in the meantime (generation check);
//! - the container is cleared before every mount, so two instances are never
//!   attached at once.

use super::plan::{EmbedOptions, RenderPlan};
use crate::domain::{Result, ScriptLoadError};

/// Ownership of one live embed instance.
///
/// Created by an [`EmbedContainer`] on mount; dropping it is only valid after
/// the container has been cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedHandle {
    instance: u64,
    options: EmbedOptions,
}

impl EmbedHandle {
    #[must_use]
    pub const fn new(instance: u64, options: EmbedOptions) -> Self {
        Self { instance, options }
    }

    /// Host-assigned instance number.
    #[must_use]
    pub const fn instance(&self) -> u64 {
        self.instance
    }

    #[must_use]
    pub const fn options(&self) -> &EmbedOptions {
        &self.options
    }
}

/// The DOM element embed instances are attached to.
pub trait EmbedContainer {
    /// Removes everything attached to the container.
    fn clear(&mut self);

    /// Constructs a new embed instance inside the container.
    ///
    /// # Errors
    ///
    /// Returns an error if the embed constructor is unavailable or throws.
    fn mount(&mut self, options: &EmbedOptions) -> Result<EmbedHandle>;
}

/// A full embed waiting for the script load to settle.
///
/// Stamped with the adapter generation at creation; settling it after a newer
/// reconcile is a no-op.
#[derive(Debug, PartialEq, Eq)]
pub struct PendingEmbed {
    generation: u64,
    options: EmbedOptions,
}

impl PendingEmbed {
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub const fn options(&self) -> &EmbedOptions {
        &self.options
    }
}

/// Owner of the embed container and the current instance.
#[derive(Debug)]
pub struct PlayerAdapter<C> {
    container: C,
    handle: Option<EmbedHandle>,
    plan: RenderPlan,
    generation: u64,
}

impl<C: EmbedContainer> PlayerAdapter<C> {
    pub fn new(container: C) -> Self {
        Self {
            container,
            handle: None,
            plan: RenderPlan::Nothing,
            generation: 0,
        }
    }

    /// Switches to a new plan.
    ///
    /// Tears down the current instance unconditionally. Returns the embed to
    /// construct once the script is available when `plan` is a full embed.
    pub fn reconcile(&mut self, plan: RenderPlan) -> Option<PendingEmbed> {
        self.dispose();
        self.generation += 1;

        tracing::debug!(generation = self.generation, plan = ?plan, "player reconciled");

        let pending = match &plan {
            RenderPlan::FullEmbed(options) => Some(PendingEmbed {
                generation: self.generation,
                options: options.clone(),
            }),
            RenderPlan::Nothing | RenderPlan::DetectingEnvironment | RenderPlan::Iframe(_) => None,
        };
        self.plan = plan;
        pending
    }

    /// Completes a pending embed with the outcome of the script load.
    ///
    /// Returns `true` if an instance was mounted. Stale pending embeds and
    /// failed loads leave the container untouched.
    pub fn settle(
        &mut self,
        pending: PendingEmbed,
        outcome: std::result::Result<(), ScriptLoadError>,
    ) -> bool {
        if pending.generation != self.generation {
            tracing::debug!(
                pending = pending.generation,
                current = self.generation,
                "ignoring stale embed"
            );
            return false;
        }

        if let Err(e) = outcome {
            tracing::error!(error = %e, "error loading or initializing embed");
            return false;
        }

        self.container.clear();
        match self.container.mount(&pending.options) {
            Ok(handle) => {
                tracing::debug!(instance = handle.instance(), "embed mounted");
                self.handle = Some(handle);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "error loading or initializing embed");
                false
            }
        }
    }

    /// Clears the container and discards the current instance, if any.
    pub fn dispose(&mut self) {
        if let Some(handle) = self.handle.take() {
            tracing::debug!(instance = handle.instance(), "disposing embed");
            self.container.clear();
        }
    }

    #[must_use]
    pub const fn plan(&self) -> &RenderPlan {
        &self.plan
    }

    #[must_use]
    pub const fn handle(&self) -> Option<&EmbedHandle> {
        self.handle.as_ref()
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub const fn container(&self) -> &C {
        &self.container
    }
}
