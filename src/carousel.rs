//! Carousel - auto-advancing slideshow with manual navigation.
//!
//! A carousel shows exactly one slide (and activates the matching
//! indicator) at a time. A repeating timer advances it; every manual
//! navigation cancels that timer and arms a fresh one, so the full interval
//! restarts after each interaction and at most one auto-advance is ever
//! pending.
//!
//! ## Example
//!
//! ```ignore
//! use yoloo_site::{Carousel, InMemoryDocument, SiteConfig, ThreadScheduler};
//!
//! let carousel = Carousel::from_config(
//!     document,
//!     vec!["slide1".into(), "slide2".into(), "slide3".into()],
//!     vec!["dot1".into(), "dot2".into(), "dot3".into()],
//!     ThreadScheduler::new(),
//!     &SiteConfig::from_env(),
//! );
//! carousel.start();
//! carousel.plus_slides(1);
//! carousel.dispose();
//! ```

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::config::SiteConfig;
use crate::document::{DisplayMode, Document};
use crate::scheduler::{Scheduler, TaskHandle};

const ACTIVE_CLASS: &str = "active";

struct State {
    /// 1-based.
    index: usize,
    timer: Option<TaskHandle>,
    /// Bumped on every arming; ticks from older armings are ignored.
    generation: u64,
    disposed: bool,
}

struct Shared<D> {
    document: D,
    slides: Vec<String>,
    indicators: Vec<String>,
    state: Mutex<State>,
}

impl<D> Shared<D> {
    fn lock(&self) -> MutexGuard<'_, State> {
        match self.state.lock() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn dispose(&self) {
        let mut state = self.lock();
        state.disposed = true;
        if let Some(timer) = state.timer.take() {
            timer.cancel();
        }
    }
}

impl<D: Document> Shared<D> {
    fn display(&self, state: &mut State, n: isize) {
        if self.slides.is_empty() {
            return;
        }
        state.index = wrap_index(n, self.slides.len());

        for slide in &self.slides {
            self.document.set_display(slide, DisplayMode::None);
        }
        for indicator in &self.indicators {
            self.document.remove_class(indicator, ACTIVE_CLASS);
        }

        let current = state.index - 1;
        self.document
            .set_display(&self.slides[current], DisplayMode::Block);
        if let Some(indicator) = self.indicators.get(current) {
            self.document.add_class(indicator, ACTIVE_CLASS);
        }
    }

    fn tick(&self, generation: u64) {
        let mut state = self.lock();
        if state.disposed || state.generation != generation {
            return;
        }
        let next = (state.index as isize).saturating_add(1);
        self.display(&mut state, next);
        tracing::trace!(index = state.index, "carousel auto-advanced");
    }
}

/// Normalize a requested slide number into `[1, len]`: anything past the
/// end wraps to the first slide, anything before the start to the last.
fn wrap_index(n: isize, len: usize) -> usize {
    if n > len as isize {
        1
    } else if n < 1 {
        len
    } else {
        n as usize
    }
}

/// A slideshow over slide and indicator elements of a [`Document`].
pub struct Carousel<D, S> {
    shared: Arc<Shared<D>>,
    scheduler: S,
    interval: Duration,
}

impl<D, S> Carousel<D, S>
where
    D: Document + 'static,
    S: Scheduler,
{
    /// `slides[i]` pairs with `indicators[i]`. Nothing is displayed until
    /// [`start`](Self::start) or a navigation call.
    pub fn new(
        document: D,
        slides: Vec<String>,
        indicators: Vec<String>,
        scheduler: S,
        interval: Duration,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                document,
                slides,
                indicators,
                state: Mutex::new(State {
                    index: 1,
                    timer: None,
                    generation: 0,
                    disposed: false,
                }),
            }),
            scheduler,
            interval,
        }
    }

    /// Like [`new`](Self::new), auto-advancing every
    /// [`SiteConfig::slide_interval`].
    pub fn from_config(
        document: D,
        slides: Vec<String>,
        indicators: Vec<String>,
        scheduler: S,
        config: &SiteConfig,
    ) -> Self {
        Self::new(
            document,
            slides,
            indicators,
            scheduler,
            config.slide_interval(),
        )
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Display the current slide and begin auto-advancing.
    pub fn start(&self) {
        let mut state = self.shared.lock();
        let current = state.index as isize;
        self.shared.display(&mut state, current);
        self.arm(&mut state);
        tracing::debug!(
            slides = self.shared.slides.len(),
            interval_ms = self.interval.as_millis() as u64,
            "carousel started"
        );
    }

    /// Display slide `n`, wrapping out-of-range values. Leaves the timer alone.
    pub fn show_slides(&self, n: isize) {
        let mut state = self.shared.lock();
        self.shared.display(&mut state, n);
    }

    /// Step by `delta` (next/previous) and restart the interval.
    pub fn plus_slides(&self, delta: isize) {
        let mut state = self.shared.lock();
        cancel(&mut state);
        let target = (state.index as isize).saturating_add(delta);
        self.shared.display(&mut state, target);
        self.arm(&mut state);
        tracing::debug!(index = state.index, delta, "carousel stepped");
    }

    /// Jump to slide `n` (indicator click) and restart the interval.
    pub fn current_slide(&self, n: isize) {
        let mut state = self.shared.lock();
        cancel(&mut state);
        self.shared.display(&mut state, n);
        self.arm(&mut state);
        tracing::debug!(index = state.index, "carousel jumped");
    }

    /// Arm auto-advance, replacing any pending one.
    pub fn auto_slides(&self) {
        let mut state = self.shared.lock();
        self.arm(&mut state);
    }

    /// Stop auto-advancing for good. Navigation still displays slides but
    /// no longer re-arms the timer.
    pub fn dispose(&self) {
        self.shared.dispose();
        tracing::debug!("carousel disposed");
    }

    /// Current 1-based slide index.
    pub fn index(&self) -> usize {
        self.shared.lock().index
    }

    pub fn len(&self) -> usize {
        self.shared.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shared.slides.is_empty()
    }

    /// Whether an auto-advance is armed.
    pub fn is_running(&self) -> bool {
        let state = self.shared.lock();
        state
            .timer
            .as_ref()
            .map(|timer| !timer.is_cancelled())
            .unwrap_or(false)
    }

    fn arm(&self, state: &mut State) {
        cancel(state);
        if state.disposed {
            return;
        }
        state.generation += 1;
        let generation = state.generation;
        let shared = Arc::clone(&self.shared);
        let handle = self.scheduler.schedule_repeating(
            self.interval,
            Box::new(move || shared.tick(generation)),
        );
        state.timer = Some(handle);
    }
}

fn cancel(state: &mut State) {
    if let Some(timer) = state.timer.take() {
        timer.cancel();
    }
}

impl<D, S> Drop for Carousel<D, S> {
    fn drop(&mut self) {
        self.shared.dispose();
    }
}
