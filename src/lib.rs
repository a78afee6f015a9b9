mod carousel;
mod clock;
mod collection;
mod config;
mod document;
mod error;
mod record;
mod render;
mod scheduler;
mod site;
mod storage;
mod ui;

pub use carousel::Carousel;
pub use clock::{Clock, FixedClock, SystemClock};
pub use collection::{Collection, CollectionsExt};
pub use config::{SiteConfig, DEFAULT_KEY_PREFIX};
pub use document::{DisplayMode, Document, Element, InMemoryDocument};
pub use error::{StorageError, ValidationError};
pub use record::{
    Blog, Entry, FormData, Game, IdGenerator, Messages, Mounts, Price, Product, RecordId,
    Resource, ResourceKind,
};
pub use render::{
    empty_state, escape_html, render_blog_preview, render_games_showcase, Locale,
    BLOG_PREVIEW_EMPTY,
};
pub use scheduler::{ManualScheduler, Scheduler, Task, TaskHandle, ThreadScheduler};
#[cfg(feature = "emitter")]
pub use site::SHOWCASE_RENDERED_EVENT;
pub use site::{
    Confirm, DeleteOutcome, IndexPage, ResourcePage, Site, SubmitOutcome, BLOGS_MOUNT,
    GAMES_EMPTY_MOUNT, GAMES_TRACK_MOUNT,
};
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore};
pub use ui::{Modal, Toast, ToastKind, TOAST_ID};

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
