//! Site - the hosted pages wired to storage, document and timers.
//!
//! A [`Site`] owns the shared pieces (store handle, document, toast, modal
//! helpers, id generator, clock). Pages borrow it:
//! - [`ResourcePage`] - list/add/delete flow for one resource type.
//! - [`IndexPage`] - landing-page previews.
//!
//! ## Example
//!
//! ```ignore
//! use yoloo_site::{FormData, InMemoryDocument, InMemoryKeyValueStore, Site, SiteConfig, ThreadScheduler};
//!
//! let site = Site::new(store, document, ThreadScheduler::new(), SiteConfig::from_env());
//! site.games().init();
//! site.games().submit(&form)?;
//! site.games().delete(id, &|message: &str| ask_user(message))?;
//! ```

mod index;
mod page;

#[cfg(feature = "emitter")]
use std::sync::MutexGuard;
use std::sync::{Arc, Mutex};

#[cfg(feature = "emitter")]
use event_emitter_rs::EventEmitter;

use crate::clock::{Clock, SystemClock};
use crate::collection::Collection;
use crate::config::SiteConfig;
use crate::document::Document;
use crate::record::{Blog, Game, IdGenerator, Product, Resource};
use crate::render::Locale;
use crate::scheduler::Scheduler;
use crate::storage::KeyValueStore;
use crate::ui::{Modal, Toast};

pub use index::{IndexPage, BLOGS_MOUNT, GAMES_EMPTY_MOUNT, GAMES_TRACK_MOUNT};
pub use page::{DeleteOutcome, ResourcePage, SubmitOutcome};

/// Event emitted after the games showcase is rendered with at least one
/// item. The payload is the number of items.
#[cfg(feature = "emitter")]
pub const SHOWCASE_RENDERED_EVENT: &str = "games:showcase-rendered";

/// The visitor's answer to a yes/no question.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// One hosted site.
pub struct Site<S, D, Sch> {
    store: S,
    document: D,
    config: SiteConfig,
    locale: Locale,
    toast: Toast<D, Sch>,
    modal: Modal<D>,
    ids: Arc<IdGenerator>,
    clock: Arc<dyn Clock>,
    /// Held across each collection read-modify-write.
    writes: Arc<Mutex<()>>,
    #[cfg(feature = "emitter")]
    emitter: Mutex<EventEmitter>,
}

impl<S, D, Sch> Site<S, D, Sch>
where
    S: KeyValueStore,
    D: Document + Clone + 'static,
    Sch: Scheduler,
{
    pub fn new(store: S, document: D, scheduler: Sch, config: SiteConfig) -> Self {
        let locale = config.locale();
        let toast = Toast::new(document.clone(), scheduler, config.toast_duration());
        let modal = Modal::new(document.clone());
        tracing::debug!(key_prefix = %config.key_prefix, "site created");

        Self {
            store,
            document,
            config,
            locale,
            toast,
            modal,
            ids: Arc::new(IdGenerator::new()),
            clock: Arc::new(SystemClock),
            writes: Arc::new(Mutex::new(())),
            #[cfg(feature = "emitter")]
            emitter: Mutex::new(EventEmitter::new()),
        }
    }

    /// Use a different time source for new records.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn toast(&self) -> &Toast<D, Sch> {
        &self.toast
    }

    pub fn modal(&self) -> &Modal<D> {
        &self.modal
    }

    /// The collection of `R` under this site's key prefix.
    pub fn collection<R: Resource>(&self) -> Collection<&S, R> {
        Collection::new(&self.store, &self.config.key_prefix)
            .with_ids(Arc::clone(&self.ids))
            .with_clock(Arc::clone(&self.clock))
            .with_write_lock(Arc::clone(&self.writes))
    }

    pub fn page<R: Resource>(&self) -> ResourcePage<'_, S, D, Sch, R> {
        ResourcePage::new(self)
    }

    pub fn games(&self) -> ResourcePage<'_, S, D, Sch, Game> {
        self.page()
    }

    pub fn blogs(&self) -> ResourcePage<'_, S, D, Sch, Blog> {
        self.page()
    }

    pub fn products(&self) -> ResourcePage<'_, S, D, Sch, Product> {
        self.page()
    }

    pub fn index(&self) -> IndexPage<'_, S, D, Sch> {
        IndexPage::new(self)
    }

    /// Register a listener for [`SHOWCASE_RENDERED_EVENT`]. Listeners run
    /// asynchronously.
    #[cfg(feature = "emitter")]
    pub fn on_showcase_rendered<F>(&self, listener: F)
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.lock_emitter().on(SHOWCASE_RENDERED_EVENT, listener);
    }

    fn notify_showcase_rendered(&self, count: usize) {
        #[cfg(feature = "emitter")]
        self.lock_emitter().emit(SHOWCASE_RENDERED_EVENT, count);
        #[cfg(not(feature = "emitter"))]
        let _ = count;
    }

    #[cfg(feature = "emitter")]
    fn lock_emitter(&self) -> MutexGuard<'_, EventEmitter> {
        match self.emitter.lock() {
            Ok(emitter) => emitter,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
