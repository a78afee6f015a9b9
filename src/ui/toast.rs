use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use crate::document::Document;
use crate::scheduler::{Scheduler, TaskHandle};

/// Element id of the toast; created on first use.
pub const TOAST_ID: &str = "toast";

const SHOW_CLASS: &str = "toast-show";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class_name(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast",
            ToastKind::Error => "toast toast-error",
        }
    }
}

/// Transient notification that hides itself after a fixed window.
///
/// Showing a new message cancels the pending hide of the previous one, so
/// every message stays up for the full window.
pub struct Toast<D, S> {
    document: D,
    scheduler: S,
    duration: Duration,
    hide: Mutex<Option<TaskHandle>>,
}

impl<D, S> Toast<D, S>
where
    D: Document + Clone + 'static,
    S: Scheduler,
{
    pub fn new(document: D, scheduler: S, duration: Duration) -> Self {
        Self {
            document,
            scheduler,
            duration,
            hide: Mutex::new(None),
        }
    }

    pub fn show(&self, message: &str, kind: ToastKind) {
        self.document.ensure_element(TOAST_ID, "toast");
        self.document.set_text(TOAST_ID, message);
        self.document.set_class_name(TOAST_ID, kind.class_name());
        self.document.add_class(TOAST_ID, SHOW_CLASS);
        tracing::debug!(?kind, message, "toast shown");

        let document = self.document.clone();
        let handle = self.scheduler.schedule_once(
            self.duration,
            Box::new(move || {
                document.remove_class(TOAST_ID, SHOW_CLASS);
            }),
        );
        // Replacing the old handle drops it, which cancels its hide.
        *self.lock_hide() = Some(handle);
    }

    pub fn success(&self, message: &str) {
        self.show(message, ToastKind::Success);
    }

    pub fn error(&self, message: &str) {
        self.show(message, ToastKind::Error);
    }

    fn lock_hide(&self) -> MutexGuard<'_, Option<TaskHandle>> {
        match self.hide.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
