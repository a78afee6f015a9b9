//! Records - the three content types a visitor can author.
//!
//! Every type is described by a [`ResourceKind`] (storage collection,
//! mount ids, UI strings) and implements [`Resource`] to extract itself
//! from a submitted form and render itself as a card. Stored records are
//! wrapped in an [`Entry`] carrying the system-assigned id and timestamp.

mod blog;
mod form;
mod game;
mod id;
mod product;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;
use crate::render::Locale;

pub use blog::Blog;
pub use form::FormData;
pub use game::Game;
pub use id::IdGenerator;
pub use product::{Price, Product};

/// Numeric record identifier, seeded from the creation time in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored record: the type's own fields plus `id` and `createdAt`.
///
/// Serializes flat, so a game is stored as
/// `{"title":..,"genre":..,"synopsis":..,"id":..,"createdAt":..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry<T> {
    #[serde(flatten)]
    pub fields: T,
    pub id: RecordId,
    pub created_at: DateTime<Utc>,
}

/// Element ids a resource page mounts into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mounts {
    pub list: &'static str,
    pub count: &'static str,
    pub form: &'static str,
    pub modal: &'static str,
}

/// User-facing strings for one resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub empty: &'static str,
    pub invalid: &'static str,
    pub added: &'static str,
    pub deleted: &'static str,
    pub confirm_delete: &'static str,
}

/// Static description of a resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceKind {
    /// Collection name, appended to the key prefix (`yoloo_games`).
    pub collection: &'static str,
    /// Unit used in the count label (`3 game`, `1 artikel`).
    pub unit: &'static str,
    pub placeholder_icon: &'static str,
    /// Host function invoked by a card's delete button.
    pub delete_handler: &'static str,
    pub mounts: Mounts,
    pub messages: Messages,
}

impl ResourceKind {
    /// Storage key for this collection under `prefix`.
    pub fn storage_key(&self, prefix: &str) -> String {
        format!("{}_{}", prefix, self.collection)
    }
}

/// A record type managed by a [`Collection`](crate::Collection).
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const KIND: ResourceKind;

    /// Pull this type's fields out of a submitted form, trimmed, failing if
    /// a required one is empty.
    fn from_form(form: &FormData) -> Result<Self, ValidationError>;

    /// Card markup for one stored record.
    fn render_card(entry: &Entry<Self>, show_delete: bool, locale: &Locale) -> String;
}

/// Reads an optional text field, treating an empty string as absent.
pub(crate) fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Markup for a card image, or `None` when the record has no image.
pub(crate) fn card_image(image: Option<&str>, alt: &str, onerror: &str) -> Option<String> {
    image.map(|src| {
        format!(
            r#"<img src="{}" alt="{}" onerror="{}">"#,
            crate::render::escape_html(src),
            crate::render::escape_html(alt),
            onerror
        )
    })
}
