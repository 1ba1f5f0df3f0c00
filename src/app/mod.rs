//! Application layer coordinating state, events, and actions.
//!
//! This module is the view state controller. It sits between the shell (which
//! talks to the page) and the domain and player layers.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transition coordinator
//! - [`modes`]: Theme and display mode types
//! - [`state`]: Central view state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{DisplayMode, Theme};
pub use state::{AppState, INVALID_INPUT_MESSAGE};
