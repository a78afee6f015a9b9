//! Record id assignment.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};

use super::RecordId;

/// Hands out strictly increasing ids seeded from the wall clock.
///
/// An id is the creation time in milliseconds unless that would not be
/// greater than the last id handed out (or the collection's current
/// maximum), in which case it is one past it. Two records created in the
/// same millisecond therefore never share an id.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id for a record created at `now`, above `floor` when given.
    pub fn next(&self, now: DateTime<Utc>, floor: Option<RecordId>) -> RecordId {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let floor = floor.map(|id| id.value()).unwrap_or(0);
        let candidate =
            |last: u64| millis.max(last.saturating_add(1)).max(floor.saturating_add(1));

        let previous = match self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(candidate(last)))
        {
            Ok(previous) | Err(previous) => previous,
        };
        RecordId::new(candidate(previous))
    }
}
