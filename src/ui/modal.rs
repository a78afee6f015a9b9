use crate::document::Document;

const ACTIVE_CLASS: &str = "active";
const OVERLAY_CLASS: &str = "yl-modal-overlay";

/// Open/close helpers for authoring modals.
///
/// Closing a modal, by button or by clicking its overlay, also resets the
/// form inside it.
pub struct Modal<D> {
    document: D,
}

impl<D: Document> Modal<D> {
    pub fn new(document: D) -> Self {
        Self { document }
    }

    pub fn open(&self, modal_id: &str) -> bool {
        self.document.add_class(modal_id, ACTIVE_CLASS)
    }

    pub fn close(&self, modal_id: &str, form_id: Option<&str>) -> bool {
        let found = self.document.remove_class(modal_id, ACTIVE_CLASS);
        if let Some(form_id) = form_id {
            self.document.reset_form(form_id);
        }
        found
    }

    pub fn is_open(&self, modal_id: &str) -> bool {
        self.document.has_class(modal_id, ACTIVE_CLASS)
    }

    /// Handle a click whose target is `target_id`. Only a click on the
    /// overlay itself dismisses; returns whether it did.
    pub fn overlay_click(&self, target_id: &str, form_id: Option<&str>) -> bool {
        if !self.document.has_class(target_id, OVERLAY_CLASS) {
            return false;
        }
        self.close(target_id, form_id)
    }
}
