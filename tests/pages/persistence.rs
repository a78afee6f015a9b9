//! A site backed by the file store keeps its records across restarts.

use yoloo_site::{
    FileKeyValueStore, Game, InMemoryDocument, ManualScheduler, Resource, Site, SiteConfig,
};

use crate::support::{full_page, game_form};

fn site(
    path: &std::path::Path,
    document: InMemoryDocument,
) -> Site<FileKeyValueStore, InMemoryDocument, ManualScheduler> {
    Site::new(
        FileKeyValueStore::new(path),
        document,
        ManualScheduler::new(),
        SiteConfig::default(),
    )
}

#[test]
fn records_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("local-storage.json");

    {
        let first = site(&path, full_page());
        first.games().submit(&game_form("Celeste")).unwrap();
        first.games().submit(&game_form("Hades")).unwrap();
    }

    let document = full_page();
    let second = site(&path, document.clone());
    second.games().init();

    assert_eq!(document.text(Game::KIND.mounts.count).as_deref(), Some("2 game"));
    let html = document.inner_html(Game::KIND.mounts.list).unwrap();
    assert!(html.find("Hades").unwrap() < html.find("Celeste").unwrap());
}

#[test]
fn corrupt_storage_renders_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("local-storage.json");
    std::fs::write(&path, r#"{"yoloo_games":"[{\"broken\":"}"#).unwrap();

    let document = full_page();
    site(&path, document.clone()).games().init();
    assert_eq!(document.text("gameCount").as_deref(), Some("0 game"));
}
