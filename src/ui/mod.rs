//! Page chrome shared by every resource page: toast notifications and
//! authoring modals.

mod modal;
mod toast;

pub use modal::Modal;
pub use toast::{Toast, ToastKind, TOAST_ID};
