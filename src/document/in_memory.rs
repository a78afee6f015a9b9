//! InMemoryDocument - element map standing in for a browser page.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{DisplayMode, Document};
use crate::record::FormData;

/// State of one element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub inner_html: String,
    pub text: String,
    pub display: Option<DisplayMode>,
    pub classes: Vec<String>,
    /// Field values when the element is a form.
    pub form: FormData,
    /// How many times the form was reset.
    pub resets: usize,
}

impl Element {
    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Page held in memory. Clone-friendly via Arc; clones see the same page.
#[derive(Clone, Default)]
pub struct InMemoryDocument {
    elements: Arc<RwLock<HashMap<String, Element>>>,
}

impl InMemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty element (builder style).
    pub fn with_element(self, id: &str) -> Self {
        self.insert(id, Element::default());
        self
    }

    pub fn with_elements(self, ids: &[&str]) -> Self {
        for id in ids {
            self.insert(id, Element::default());
        }
        self
    }

    /// Add an element carrying the given classes (builder style).
    pub fn with_classes(self, id: &str, class_name: &str) -> Self {
        self.insert(
            id,
            Element {
                classes: split_classes(class_name),
                ..Element::default()
            },
        );
        self
    }

    pub fn insert(&self, id: &str, element: Element) {
        if let Ok(mut elements) = self.elements.write() {
            elements.insert(id.to_string(), element);
        }
    }

    /// Type into a form the way a visitor would.
    pub fn fill_form(&self, id: &str, values: FormData) -> bool {
        self.update(id, |el| el.form = values)
    }

    pub fn element(&self, id: &str) -> Option<Element> {
        self.elements.read().ok()?.get(id).cloned()
    }

    pub fn inner_html(&self, id: &str) -> Option<String> {
        self.element(id).map(|el| el.inner_html)
    }

    pub fn text(&self, id: &str) -> Option<String> {
        self.element(id).map(|el| el.text)
    }

    pub fn display(&self, id: &str) -> Option<DisplayMode> {
        self.element(id).and_then(|el| el.display)
    }

    pub fn class_name(&self, id: &str) -> Option<String> {
        self.element(id).map(|el| el.classes.join(" "))
    }

    pub fn form(&self, id: &str) -> Option<FormData> {
        self.element(id).map(|el| el.form)
    }

    fn update(&self, id: &str, f: impl FnOnce(&mut Element)) -> bool {
        let Ok(mut elements) = self.elements.write() else {
            tracing::warn!(id, "document lock poisoned");
            return false;
        };
        match elements.get_mut(id) {
            Some(element) => {
                f(element);
                true
            }
            None => false,
        }
    }
}

fn split_classes(class_name: &str) -> Vec<String> {
    class_name.split_whitespace().map(str::to_string).collect()
}

impl Document for InMemoryDocument {
    fn contains(&self, id: &str) -> bool {
        self.elements
            .read()
            .map(|elements| elements.contains_key(id))
            .unwrap_or(false)
    }

    fn set_inner_html(&self, id: &str, html: &str) -> bool {
        self.update(id, |el| el.inner_html = html.to_string())
    }

    fn set_text(&self, id: &str, text: &str) -> bool {
        self.update(id, |el| el.text = text.to_string())
    }

    fn set_display(&self, id: &str, display: DisplayMode) -> bool {
        self.update(id, |el| el.display = Some(display))
    }

    fn set_class_name(&self, id: &str, class_name: &str) -> bool {
        self.update(id, |el| el.classes = split_classes(class_name))
    }

    fn add_class(&self, id: &str, class: &str) -> bool {
        self.update(id, |el| {
            if !el.has_class(class) {
                el.classes.push(class.to_string());
            }
        })
    }

    fn remove_class(&self, id: &str, class: &str) -> bool {
        self.update(id, |el| el.classes.retain(|c| c != class))
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        self.element(id).map(|el| el.has_class(class)).unwrap_or(false)
    }

    fn reset_form(&self, id: &str) -> bool {
        self.update(id, |el| {
            el.form.clear();
            el.resets += 1;
        })
    }

    fn ensure_element(&self, id: &str, class_name: &str) {
        if let Ok(mut elements) = self.elements.write() {
            elements.entry(id.to_string()).or_insert_with(|| Element {
                classes: split_classes(class_name),
                ..Element::default()
            });
        }
    }
}
