//! Document - the rendering surface the site mounts into.
//!
//! Elements are addressed by id. Every mutator reports whether the element
//! exists, so callers can skip optional mounts without treating them as
//! errors.

mod in_memory;

pub use in_memory::{Element, InMemoryDocument};

/// CSS `display` values the site toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    None,
    Block,
    Flex,
}

impl DisplayMode {
    pub fn as_css(&self) -> &'static str {
        match self {
            DisplayMode::None => "none",
            DisplayMode::Block => "block",
            DisplayMode::Flex => "flex",
        }
    }
}

/// A mutable view of the host page.
pub trait Document: Send + Sync {
    fn contains(&self, id: &str) -> bool;

    fn set_inner_html(&self, id: &str, html: &str) -> bool;

    fn set_text(&self, id: &str, text: &str) -> bool;

    fn set_display(&self, id: &str, display: DisplayMode) -> bool;

    /// Replace the whole class list with the space-separated `class_name`.
    fn set_class_name(&self, id: &str, class_name: &str) -> bool;

    fn add_class(&self, id: &str, class: &str) -> bool;

    fn remove_class(&self, id: &str, class: &str) -> bool;

    fn has_class(&self, id: &str, class: &str) -> bool;

    /// Clear the values of the form with this id.
    fn reset_form(&self, id: &str) -> bool;

    /// Append an element with `id` and `class_name` to the page body unless
    /// one already exists.
    fn ensure_element(&self, id: &str, class_name: &str);
}
