//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `PageViewModel`
//! 2. **Component Rendering**: Delegate to the component renderers
//!
//! # Example
//!
//! ```rust
//! use ministream::app::AppState;
//! use ministream::ui::render;
//!
//! let mut state = AppState::default();
//! state.submit("not a url!! ").unwrap_err();
//! assert!(render(&state).contains("Invalid Twitch URL"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::viewmodel::PageViewModel;

/// Renders the page markup for the current state.
#[must_use]
pub fn render(state: &AppState) -> String {
    let viewmodel = state.compute_viewmodel();
    render_viewmodel(&viewmodel)
}

/// Renders a precomputed view model.
#[must_use]
pub fn render_viewmodel(vm: &PageViewModel) -> String {
    components::render_page(vm)
}
