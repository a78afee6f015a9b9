//! Thread-backed timers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use super::{Scheduler, Task, TaskHandle};

/// Runs each armed task on its own background thread.
///
/// The thread waits on a stop channel with the period as timeout: a
/// timeout fires the task, a stop signal (or the handle being dropped)
/// ends the thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadScheduler;

impl ThreadScheduler {
    pub fn new() -> Self {
        Self
    }

    fn spawn(&self, period: Duration, mut task: Task, repeat: bool) -> TaskHandle {
        let (stop_tx, stop_rx) = channel();
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);

        thread::spawn(move || loop {
            match stop_rx.recv_timeout(period) {
                Err(RecvTimeoutError::Timeout) => {
                    if flag.load(Ordering::SeqCst) {
                        break;
                    }
                    task();
                    if !repeat {
                        break;
                    }
                }
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });

        TaskHandle::new(cancelled, Some(stop_tx))
    }
}

impl Scheduler for ThreadScheduler {
    fn schedule_once(&self, delay: Duration, task: Task) -> TaskHandle {
        self.spawn(delay, task, false)
    }

    fn schedule_repeating(&self, period: Duration, task: Task) -> TaskHandle {
        self.spawn(period, task, true)
    }
}
