//! Header component renderer.

use crate::ui::helpers::escape_html;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the page title and tagline.
pub fn render_header(header: &HeaderInfo) -> String {
    format!(
        "<header>\n<h1>{}</h1>\n<p>{}</p>\n</header>\n",
        escape_html(&header.title),
        escape_html(&header.subtitle)
    )
}
