//! Page rendering layer with component-based architecture.
//!
//! This module turns view state into page markup through composable rendering
//! components. Styling is left to the stylesheet; the markup only carries the
//! structure, the theme class and the player configuration.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → PageViewModel → render → HTML
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable page state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable component renderers
//! - [`helpers`]: Shared rendering utilities (escaping, attributes)
//!
//! # Example
//!
//! ```rust
//! use ministream::app::AppState;
//! use ministream::ui::render;
//!
//! let markup = render(&AppState::default());
//! assert!(markup.contains("MINIStream"));
//! ```

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod viewmodel;

pub use renderer::{render, render_viewmodel};
pub use viewmodel::{HeaderInfo, ModeToggleInfo, PageViewModel, PlayerView};
