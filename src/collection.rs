//! Collection - a newest-first list of records stored under one key.

use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clock::{Clock, SystemClock};
use crate::config::DEFAULT_KEY_PREFIX;
use crate::error::StorageError;
use crate::record::{Entry, IdGenerator, RecordId, Resource};
use crate::storage::KeyValueStore;

/// One element of the stored array.
///
/// Elements that do not decode as `R` stay `Raw` and are written back
/// unchanged, so a rewrite never loses them.
#[derive(Serialize)]
#[serde(untagged)]
enum Stored<R> {
    Entry(Entry<R>),
    Raw(Value),
}

impl<R> Stored<R> {
    fn id(&self) -> Option<RecordId> {
        match self {
            Stored::Entry(entry) => Some(entry.id),
            Stored::Raw(value) => value.get("id").and_then(Value::as_u64).map(RecordId::new),
        }
    }
}

/// Typed access to one resource type's collection.
///
/// The whole collection is a single JSON array under
/// `<prefix>_<collection>`. Reads never fail: a missing key or a payload
/// that is not a JSON array is an empty collection, and array elements that
/// do not decode are skipped. Writes replace the array under a write lock;
/// handles that share the lock never lose each other's records.
pub struct Collection<S, R> {
    store: S,
    key: String,
    ids: Arc<IdGenerator>,
    clock: Arc<dyn Clock>,
    writes: Arc<Mutex<()>>,
    _marker: PhantomData<fn() -> R>,
}

impl<S: KeyValueStore, R: Resource> Collection<S, R> {
    pub fn new(store: S, key_prefix: &str) -> Self {
        Self {
            store,
            key: R::KIND.storage_key(key_prefix),
            ids: Arc::new(IdGenerator::new()),
            clock: Arc::new(SystemClock),
            writes: Arc::new(Mutex::new(())),
            _marker: PhantomData,
        }
    }

    /// Use a different time source for `createdAt` and ids.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Share an id generator with other collections.
    pub fn with_ids(mut self, ids: Arc<IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Serialize `add`/`remove` with other handles holding the same lock.
    pub fn with_write_lock(mut self, writes: Arc<Mutex<()>>) -> Self {
        self.writes = writes;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// All records, newest first.
    pub fn list(&self) -> Vec<Entry<R>> {
        self.load()
            .into_iter()
            .filter_map(|stored| match stored {
                Stored::Entry(entry) => Some(entry),
                Stored::Raw(_) => None,
            })
            .collect()
    }

    /// The first `limit` records, newest first.
    pub fn preview(&self, limit: usize) -> Vec<Entry<R>> {
        let mut entries = self.list();
        entries.truncate(limit);
        entries
    }

    pub fn len(&self) -> usize {
        self.list().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stamp `fields` with an id and `createdAt`, prepend and persist.
    ///
    /// Required fields are the caller's concern; nothing is validated here.
    pub fn add(&self, fields: R) -> Result<Entry<R>, StorageError> {
        let _guard = self.lock_writes();
        let mut stored = self.load();
        let floor = stored.iter().filter_map(Stored::id).max();
        let now = self.clock.now();
        let entry = Entry {
            fields,
            id: self.ids.next(now, floor),
            created_at: now,
        };

        stored.insert(0, Stored::Entry(entry.clone()));
        self.save(&stored)?;
        tracing::info!(
            collection = R::KIND.collection,
            id = %entry.id,
            total = stored.len(),
            "record added"
        );
        Ok(entry)
    }

    /// Remove the element with `id`, decodable or not. Returns true if it
    /// existed; an unknown id leaves storage untouched.
    pub fn remove(&self, id: RecordId) -> Result<bool, StorageError> {
        let _guard = self.lock_writes();
        let mut stored = self.load();
        let before = stored.len();
        stored.retain(|s| s.id() != Some(id));

        if stored.len() == before {
            tracing::debug!(
                collection = R::KIND.collection,
                %id,
                "remove: no such record"
            );
            return Ok(false);
        }

        self.save(&stored)?;
        tracing::info!(
            collection = R::KIND.collection,
            %id,
            total = stored.len(),
            "record removed"
        );
        Ok(true)
    }

    fn load(&self) -> Vec<Stored<R>> {
        let raw = match self.store.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(
                    key = %self.key,
                    error = %e,
                    "collection read failed, treating as empty"
                );
                return Vec::new();
            }
        };

        let values = match serde_json::from_str::<Option<Vec<Value>>>(&raw) {
            Ok(values) => values.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(
                    key = %self.key,
                    error = %e,
                    "malformed collection payload, treating as empty"
                );
                return Vec::new();
            }
        };

        values
            .into_iter()
            .map(|value| match Entry::<R>::deserialize(&value) {
                Ok(entry) => Stored::Entry(entry),
                Err(e) => {
                    tracing::warn!(key = %self.key, error = %e, "skipping undecodable record");
                    Stored::Raw(value)
                }
            })
            .collect()
    }

    fn save(&self, stored: &[Stored<R>]) -> Result<(), StorageError> {
        let payload = serde_json::to_string(stored)?;
        self.store.set_item(&self.key, payload)
    }

    fn lock_writes(&self) -> MutexGuard<'_, ()> {
        match self.writes.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// Extension trait for typed collection access on any KeyValueStore.
pub trait CollectionsExt: KeyValueStore + Sized {
    /// A collection under the default `yoloo` key prefix.
    fn collection<R: Resource>(&self) -> Collection<&Self, R> {
        Collection::new(self, DEFAULT_KEY_PREFIX)
    }
}

impl<S: KeyValueStore> CollectionsExt for S {}
