//! Actions representing side effects to be executed by the shell.
//!
//! This module defines the [`Action`] type, the imperative commands produced by
//! the event handler after a state transition. Actions bridge pure state
//! changes and effectful operations on the page: rewriting the address bar,
//! applying the theme to the document, and reconfiguring the player.
//!
//! # Ordering
//!
//! The handler returns actions in execution order. When a submission rewrites
//! the address bar, [`Action::ReplaceAddress`] is always last so that the
//! visible address mirrors the most recent resolver result.
//!
//! # Example
//!
//! ```rust
//! use ministream::app::{Action, Theme};
//!
//! let actions = vec![Action::ApplyTheme(Theme::Dark), Action::ReplaceAddress(None)];
//! assert_eq!(actions.len(), 2);
//! ```

use super::modes::Theme;
use crate::domain::ContentReference;
use crate::player::RenderPlan;

/// Commands representing side effects to be executed by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Rewrites the address bar query to reflect the reference.
    ///
    /// `Some` produces exactly one `kind=id` parameter; `None` removes the
    /// query entirely. Performed without navigation.
    ReplaceAddress(Option<ContentReference>),

    /// Applies the theme to the document root.
    ApplyTheme(Theme),

    /// Switches the player to a new rendering plan.
    ///
    /// Emitted whenever the plan derived from state changes. The shell hands
    /// it to the player adapter, which tears down the previous instance first.
    ReconcilePlayer(RenderPlan),
}
