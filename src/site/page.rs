//! The list/add/delete flow shared by the games, blog and store pages.

use std::marker::PhantomData;

use super::{Confirm, Site};
use crate::document::Document;
use crate::error::{StorageError, ValidationError};
use crate::record::{Entry, FormData, RecordId, Resource};
use crate::render::empty_state;
use crate::scheduler::Scheduler;
use crate::storage::KeyValueStore;

/// Result of a form submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<R> {
    Added(Entry<R>),
    /// A required field was empty; nothing was stored.
    Rejected(ValidationError),
}

/// Result of a delete click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// Confirmed, but no record had that id.
    Missing,
    /// The visitor declined the confirmation.
    Cancelled,
}

/// Page for one resource type, mounted at the ids of `R::KIND`.
pub struct ResourcePage<'a, S, D, Sch, R> {
    site: &'a Site<S, D, Sch>,
    _marker: PhantomData<fn() -> R>,
}

impl<'a, S, D, Sch, R> ResourcePage<'a, S, D, Sch, R>
where
    S: KeyValueStore,
    D: Document + Clone + 'static,
    Sch: Scheduler,
    R: Resource,
{
    pub(crate) fn new(site: &'a Site<S, D, Sch>) -> Self {
        Self {
            site,
            _marker: PhantomData,
        }
    }

    /// Page entry: render the current list.
    pub fn init(&self) {
        self.render_all();
    }

    /// Render every record (with delete buttons) and the count label.
    /// Skipped when the page has no list mount.
    pub fn render_all(&self) {
        let kind = &R::KIND;
        let document = &self.site.document;
        if !document.contains(kind.mounts.list) {
            return;
        }

        let entries = self.site.collection::<R>().list();
        document.set_text(
            kind.mounts.count,
            &format!("{} {}", entries.len(), kind.unit),
        );

        let html = if entries.is_empty() {
            empty_state(kind.placeholder_icon, kind.messages.empty)
        } else {
            entries
                .iter()
                .map(|entry| R::render_card(entry, true, &self.site.locale))
                .collect()
        };
        document.set_inner_html(kind.mounts.list, &html);
        tracing::debug!(
            collection = kind.collection,
            count = entries.len(),
            "list rendered"
        );
    }

    /// Handle the add form. Invalid input shows an error toast and leaves
    /// everything as it was.
    pub fn submit(&self, form: &FormData) -> Result<SubmitOutcome<R>, StorageError> {
        let kind = &R::KIND;
        let fields = match R::from_form(form) {
            Ok(fields) => fields,
            Err(e) => {
                tracing::debug!(collection = kind.collection, error = %e, "form rejected");
                self.site.toast.error(kind.messages.invalid);
                return Ok(SubmitOutcome::Rejected(e));
            }
        };

        let entry = self.site.collection::<R>().add(fields)?;
        self.close_modal();
        self.render_all();
        self.site.toast.success(kind.messages.added);
        Ok(SubmitOutcome::Added(entry))
    }

    /// Handle a delete click, asking `confirm` first.
    pub fn delete(
        &self,
        id: RecordId,
        confirm: &dyn Confirm,
    ) -> Result<DeleteOutcome, StorageError> {
        let kind = &R::KIND;
        if !confirm.confirm(kind.messages.confirm_delete) {
            return Ok(DeleteOutcome::Cancelled);
        }

        let removed = self.site.collection::<R>().remove(id)?;
        self.render_all();
        self.site.toast.success(kind.messages.deleted);
        Ok(if removed {
            DeleteOutcome::Deleted
        } else {
            DeleteOutcome::Missing
        })
    }

    pub fn open_modal(&self) -> bool {
        self.site.modal.open(R::KIND.mounts.modal)
    }

    /// Close the authoring modal and reset its form.
    pub fn close_modal(&self) -> bool {
        self.site
            .modal
            .close(R::KIND.mounts.modal, Some(R::KIND.mounts.form))
    }

    /// A click landed on `target_id`; dismiss the modal if it was the overlay.
    pub fn overlay_click(&self, target_id: &str) -> bool {
        if target_id != R::KIND.mounts.modal {
            return false;
        }
        self.site
            .modal
            .overlay_click(target_id, Some(R::KIND.mounts.form))
    }
}
