//! Virtual-time timers driven by the caller.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use super::{Scheduler, Task, TaskHandle};

/// Repeating tasks never re-arm closer than this, so a zero period cannot
/// spin `advance` forever.
const MIN_PERIOD: Duration = Duration::from_millis(1);

struct Pending {
    due: Duration,
    seq: u64,
    period: Option<Duration>,
    cancelled: Arc<AtomicBool>,
    task: Task,
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    next_seq: u64,
    tasks: Vec<Pending>,
}

/// Scheduler whose clock only moves in [`advance`](Self::advance).
///
/// Due tasks run on the calling thread in due-time order (ties in arming
/// order). Clones share the same clock and queue.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Arc<Mutex<ManualState>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ManualState> {
        match self.state.lock() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.lock().now
    }

    /// Number of armed, uncancelled tasks.
    pub fn pending(&self) -> usize {
        let mut state = self.lock();
        state.tasks.retain(|t| !t.cancelled.load(Ordering::SeqCst));
        state.tasks.len()
    }

    /// Move the clock forward by `by`, running every task that falls due.
    /// Returns how many task runs happened.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.lock().now + by;
        let mut ran = 0;

        loop {
            let mut next = {
                let mut state = self.lock();
                state.tasks.retain(|t| !t.cancelled.load(Ordering::SeqCst));
                let due = state
                    .tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| (t.due, t.seq))
                    .map(|(i, _)| i);
                match due {
                    Some(i) => {
                        let pending = state.tasks.swap_remove(i);
                        state.now = pending.due;
                        pending
                    }
                    None => {
                        state.now = target;
                        break;
                    }
                }
            };

            (next.task)();
            ran += 1;

            if let Some(period) = next.period {
                if !next.cancelled.load(Ordering::SeqCst) {
                    let mut state = self.lock();
                    next.due += period.max(MIN_PERIOD);
                    next.seq = state.next_seq;
                    state.next_seq += 1;
                    state.tasks.push(next);
                }
            }
        }

        ran
    }

    fn arm(&self, delay: Duration, period: Option<Duration>, task: Task) -> TaskHandle {
        let cancelled = Arc::new(AtomicBool::new(false));
        let mut state = self.lock();
        let seq = state.next_seq;
        state.next_seq += 1;
        let due = state.now + delay;
        state.tasks.push(Pending {
            due,
            seq,
            period,
            cancelled: Arc::clone(&cancelled),
            task,
        });
        TaskHandle::new(cancelled, None)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_once(&self, delay: Duration, task: Task) -> TaskHandle {
        self.arm(delay, None, task)
    }

    fn schedule_repeating(&self, period: Duration, task: Task) -> TaskHandle {
        self.arm(period.max(MIN_PERIOD), Some(period), task)
    }
}
