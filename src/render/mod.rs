//! HTML fragment rendering shared by every resource type.
//!
//! Fragments are plain strings. Anything that came from a visitor goes
//! through [`escape_html`] before it is interpolated.

mod locale;
mod showcase;

pub use locale::Locale;
pub use showcase::{render_blog_preview, render_games_showcase, BLOG_PREVIEW_EMPTY};

use crate::record::RecordId;

/// Escape `&`, `<`, `>` and `"` for embedding in element content or a
/// double-quoted attribute.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}

/// Placeholder shown in place of an empty list. `icon` and `message` are
/// trusted literals.
pub fn empty_state(icon: &str, message: &str) -> String {
    format!(
        r#"<div class="yl-empty-state"><div>{}</div><p>{}</p></div>"#,
        icon, message
    )
}

/// The delete affordance wired to a record id, or nothing.
pub(crate) fn delete_button(handler: &str, id: RecordId, show: bool) -> String {
    if show {
        format!(
            r#"<button class="yl-delete-btn" onclick="{}({})">🗑 Hapus</button>"#,
            handler, id
        )
    } else {
        String::new()
    }
}
