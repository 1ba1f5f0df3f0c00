//! Composable page component renderers.
//!
//! Each component renders one part of the page into a `String`, and
//! [`render_page`] stitches them together in document order.
//!
//! # Components
//!
//! - [`header`]: Title and tagline
//! - [`toggles`]: Theme switch and display mode switch
//! - [`input`]: Input bar with the inline error message
//! - [`player`]: Placeholder, iframe or embed container, plus diagnostics
//!
//! # Layout
//!
//! ```text
//! <div class="{theme}">
//!   [Theme toggle]
//!   <main>
//!     [Header]
//!     [Input bar + error]
//!     [Mode toggle]
//!     [Player]
//!   </main>
//! </div>
//! ```

mod header;
mod input;
mod player;
mod toggles;

use crate::ui::viewmodel::PageViewModel;

use header::render_header;
use input::render_input_bar;
use player::render_player;
use toggles::{render_mode_toggle, render_theme_toggle};

/// Renders the full page layout.
#[must_use]
pub fn render_page(vm: &PageViewModel) -> String {
    let mut page = String::new();
    page.push_str(&format!("<div class=\"{}\">\n", vm.theme));
    page.push_str(&render_theme_toggle(vm.theme));
    page.push_str("<main>\n");
    page.push_str(&render_header(&vm.header));
    page.push_str(&render_input_bar(vm.error.as_deref()));
    page.push_str(&render_mode_toggle(&vm.mode_toggle));
    page.push_str(&render_player(&vm.player));
    page.push_str("</main>\n</div>\n");
    page
}
