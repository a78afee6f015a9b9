//! Scheduler - cancellable timers for the carousel and toast.
//!
//! Two implementations:
//! - [`ThreadScheduler`] - one std thread per armed task, woken by a stop
//!   channel or its timeout.
//! - [`ManualScheduler`] - virtual time advanced by the caller; tasks run
//!   on the caller's thread. Used by tests and single-threaded hosts.

mod manual;
mod thread;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

pub use manual::ManualScheduler;
pub use thread::ThreadScheduler;

/// Work run when a timer fires.
pub type Task = Box<dyn FnMut() + Send + 'static>;

/// Arms timers.
pub trait Scheduler: Send + Sync {
    /// Run `task` once after `delay`.
    fn schedule_once(&self, delay: Duration, task: Task) -> TaskHandle;

    /// Run `task` every `period` until cancelled.
    fn schedule_repeating(&self, period: Duration, task: Task) -> TaskHandle;
}

impl<S: Scheduler + ?Sized> Scheduler for Arc<S> {
    fn schedule_once(&self, delay: Duration, task: Task) -> TaskHandle {
        (**self).schedule_once(delay, task)
    }

    fn schedule_repeating(&self, period: Duration, task: Task) -> TaskHandle {
        (**self).schedule_repeating(period, task)
    }
}

/// Handle to an armed timer. Dropping the handle cancels the timer.
#[derive(Debug)]
pub struct TaskHandle {
    cancelled: Arc<AtomicBool>,
    stop_tx: Option<Sender<()>>,
}

impl TaskHandle {
    pub(crate) fn new(cancelled: Arc<AtomicBool>, stop_tx: Option<Sender<()>>) -> Self {
        Self { cancelled, stop_tx }
    }

    /// Cancel the timer. A task already running finishes; it is not run again.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        if let Some(stop_tx) = &self.stop_tx {
            let _ = stop_tx.send(());
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
