//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes page lifecycle
//! events and user input, translating them into state changes and action
//! sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the shell (startup, hostname detection, user input)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! A [`Action::ReconcilePlayer`] is emitted whenever the rendering plan derived
//! from state differs before and after the event, which covers every change of
//! reference, display mode, theme (for full embeds) and hostname.
//!
//! # Example
//!
//! ```rust
//! use ministream::app::{handle_event, Action, AppState, Event};
//!
//! let mut state = AppState::default();
//! let (render, actions) = handle_event(&mut state, &Event::Submit("someone".into()))?;
//! assert!(render);
//! assert!(matches!(actions.last(), Some(Action::ReplaceAddress(Some(_)))));
//! # Ok::<(), ministream::MiniStreamError>(())
//! ```

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::player::RenderPlan;

/// Events triggered by the page lifecycle or user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The page finished loading with the given query string (`?...` or empty).
    PageLoaded {
        /// Query string of the startup address.
        search: String,
    },

    /// The page hostname became known.
    HostnameDetected(String),

    /// The user submitted the input bar.
    Submit(String),

    /// The input text changed before submission.
    InputChanged,

    /// The theme switch was clicked.
    ToggleTheme,

    /// The display mode switch was clicked.
    ToggleDisplayMode,
}

/// Processes an event, mutates state, and returns whether to re-render along
/// with the actions to execute in order.
///
/// # Errors
///
/// Currently infallible; the `Result` leaves room for host-backed events.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let plan_before = state.render_plan();
    let mut actions = vec![];

    let should_render = match event {
        Event::PageLoaded { search } => {
            state.init_from_query(search);
            actions.push(Action::ApplyTheme(state.theme));
            true
        }
        Event::HostnameDetected(hostname) => {
            let changed = state.hostname_detected(hostname);
            tracing::debug!(hostname = %hostname, changed = changed, "hostname detected");
            changed
        }
        Event::Submit(raw) => {
            let resolved = state.submit(raw).ok().cloned();
            push_reconcile(state, &plan_before, &mut actions);
            actions.push(Action::ReplaceAddress(resolved));
            return Ok((true, actions));
        }
        Event::InputChanged => state.input_changed(),
        Event::ToggleTheme => {
            let theme = state.toggle_theme();
            tracing::debug!(theme = %theme, "theme toggled");
            actions.push(Action::ApplyTheme(theme));
            true
        }
        Event::ToggleDisplayMode => {
            let toggled = state.toggle_display_mode();
            if toggled {
                tracing::debug!(mode = %state.display_mode, "display mode toggled");
            }
            toggled
        }
    };

    push_reconcile(state, &plan_before, &mut actions);
    Ok((should_render || !actions.is_empty(), actions))
}

fn push_reconcile(state: &AppState, plan_before: &RenderPlan, actions: &mut Vec<Action>) {
    let plan_after = state.render_plan();
    if &plan_after != plan_before {
        tracing::debug!(plan = ?plan_after, "render plan changed");
        actions.push(Action::ReconcilePlayer(plan_after));
    }
}
