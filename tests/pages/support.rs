//! Shared fixtures: an in-memory page with every mount the site uses.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use yoloo_site::{
    Blog, FixedClock, FormData, Game, InMemoryDocument, InMemoryKeyValueStore, ManualScheduler,
    Product, Resource, Site, SiteConfig, BLOGS_MOUNT, GAMES_EMPTY_MOUNT, GAMES_TRACK_MOUNT,
};

pub type TestSite = Site<InMemoryKeyValueStore, InMemoryDocument, ManualScheduler>;

pub struct Harness {
    pub store: InMemoryKeyValueStore,
    pub document: InMemoryDocument,
    pub scheduler: ManualScheduler,
    pub clock: FixedClock,
    pub site: TestSite,
}

/// A page carrying the list, count, form and modal of every resource type,
/// plus the landing-page mounts.
pub fn full_page() -> InMemoryDocument {
    let mut document = InMemoryDocument::new();
    for kind in [Game::KIND, Blog::KIND, Product::KIND] {
        document = document
            .with_element(kind.mounts.list)
            .with_element(kind.mounts.count)
            .with_element(kind.mounts.form)
            .with_classes(kind.mounts.modal, "yl-modal-overlay");
    }
    document.with_elements(&[GAMES_TRACK_MOUNT, GAMES_EMPTY_MOUNT, BLOGS_MOUNT])
}

pub fn harness() -> Harness {
    harness_with(full_page())
}

pub fn harness_with(document: InMemoryDocument) -> Harness {
    let store = InMemoryKeyValueStore::new();
    let scheduler = ManualScheduler::new();
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2026, 10, 18, 2, 0, 0).unwrap());
    let site = Site::new(
        store.clone(),
        document.clone(),
        scheduler.clone(),
        SiteConfig::default(),
    )
    .with_clock(Arc::new(clock.clone()));

    Harness {
        store,
        document,
        scheduler,
        clock,
        site,
    }
}

pub fn game_form(title: &str) -> FormData {
    FormData::new()
        .with("gameTitle", title)
        .with("gameGenre", "Platformer")
        .with("gameSynopsis", "Climb the mountain")
        .with("gameImage", "")
}

pub fn blog_form(title: &str) -> FormData {
    FormData::new()
        .with("blogTitle", title)
        .with("blogContent", "Catatan rilis minggu ini")
        .with("blogImage", "")
}

pub fn product_form(name: &str, price: &str) -> FormData {
    FormData::new()
        .with("productName", name)
        .with("productPrice", price)
        .with("productCategory", "Merch")
        .with("productDesc", "")
        .with("productImage", "")
        .with("productMarketplace", "https://shop.example/item")
}

pub fn accept(_message: &str) -> bool {
    true
}

pub fn decline(_message: &str) -> bool {
    false
}

/// Leading number of a count label such as `3 game`.
pub fn count(document: &InMemoryDocument, id: &str) -> usize {
    document
        .text(id)
        .and_then(|text| text.split_whitespace().next().map(str::to_string))
        .and_then(|n| n.parse().ok())
        .unwrap_or(0)
}
