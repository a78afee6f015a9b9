//! Games page: list, add, delete.

use std::time::Duration;

use yoloo_site::{
    Clock, CollectionsExt, DeleteOutcome, Document, Game, KeyValueStore, SubmitOutcome, ValidationError,
    TOAST_ID,
};

use crate::support::{accept, count, decline, game_form, harness, harness_with};

// ============================================================================
// Page entry
// ============================================================================

#[test]
fn empty_page_shows_placeholder_and_zero_count() {
    let h = harness();
    h.site.games().init();

    assert_eq!(h.document.text("gameCount").as_deref(), Some("0 game"));
    let html = h.document.inner_html("allGames").unwrap();
    assert!(html.contains("Belum ada game. Klik tombol di atas untuk menambahkan!"));
    assert!(html.contains("🎮"));
}

#[test]
fn missing_list_mount_is_skipped() {
    let h = harness_with(yoloo_site::InMemoryDocument::new().with_element("gameCount"));
    h.site.games().init();
    assert_eq!(h.document.text("gameCount").as_deref(), Some(""));
}

// ============================================================================
// Add form
// ============================================================================

#[test]
fn valid_submission_adds_first_and_closes_modal() {
    let h = harness();
    let games = h.site.games();
    games.init();
    games.submit(&game_form("Celeste")).unwrap();

    games.open_modal();
    h.document.fill_form("addGameForm", game_form("Hollow Knight"));
    let outcome = games.submit(&game_form("Hollow Knight")).unwrap();

    let added = match outcome {
        SubmitOutcome::Added(entry) => entry,
        other => panic!("expected Added, got {:?}", other),
    };
    assert_eq!(added.fields.title, "Hollow Knight");

    // Toast
    assert_eq!(
        h.document.text(TOAST_ID).as_deref(),
        Some("✅ Game berhasil ditambahkan!")
    );
    assert!(!h.document.has_class(TOAST_ID, "toast-error"));

    // Modal closed, form reset
    assert!(!h.site.modal().is_open("gameModal"));
    assert!(h.document.form("addGameForm").unwrap().is_empty());

    // Count and order
    assert_eq!(count(&h.document, "gameCount"), 2);
    let html = h.document.inner_html("allGames").unwrap();
    let newest = html.find("Hollow Knight").unwrap();
    let older = html.find("Celeste").unwrap();
    assert!(newest < older);
    assert!(html.starts_with(&format!(r#"<div class="blog-preview-card" data-id="{}""#, added.id)));
    assert!(html.contains(&format!("handleDeleteGame({})", added.id)));

    let stored = h.store.collection::<Game>().list();
    assert_eq!(stored[0].id, added.id);
    assert_eq!(stored[0].created_at, h.clock.now());
}

#[test]
fn missing_required_field_is_rejected() {
    let h = harness();
    let games = h.site.games();
    games.submit(&game_form("Celeste")).unwrap();
    games.open_modal();

    let before = h.store.get_item("yoloo_games").unwrap();
    let outcome = games
        .submit(&game_form("Portal").with("gameSynopsis", "   "))
        .unwrap();

    assert_eq!(
        outcome,
        SubmitOutcome::Rejected(ValidationError::MissingFields(vec!["gameSynopsis"]))
    );
    assert_eq!(
        h.document.text(TOAST_ID).as_deref(),
        Some("Harap isi semua field wajib!")
    );
    assert!(h.document.has_class(TOAST_ID, "toast-error"));
    assert!(h.site.modal().is_open("gameModal"));
    assert_eq!(h.store.get_item("yoloo_games").unwrap(), before);
    assert_eq!(count(&h.document, "gameCount"), 1);
}

#[test]
fn script_in_title_is_escaped() {
    let h = harness();
    h.site
        .games()
        .submit(&game_form("<script>alert(1)</script>"))
        .unwrap();

    let html = h.document.inner_html("allGames").unwrap();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}

#[test]
fn toast_disappears_after_three_seconds() {
    let h = harness();
    h.site.games().submit(&game_form("Celeste")).unwrap();
    assert!(h.document.has_class(TOAST_ID, "toast-show"));

    h.scheduler.advance(Duration::from_secs(3));
    assert!(!h.document.has_class(TOAST_ID, "toast-show"));
}

// ============================================================================
// Delete
// ============================================================================

#[test]
fn confirmed_delete_removes_record() {
    let h = harness();
    let games = h.site.games();
    let keep = added(games.submit(&game_form("Keep")).unwrap());
    let gone = added(games.submit(&game_form("Gone")).unwrap());

    let outcome = games.delete(gone, &accept).unwrap();
    assert_eq!(outcome, DeleteOutcome::Deleted);

    assert_eq!(count(&h.document, "gameCount"), 1);
    let html = h.document.inner_html("allGames").unwrap();
    assert!(!html.contains("Gone"));
    assert!(html.contains("Keep"));
    assert_eq!(h.document.text(TOAST_ID).as_deref(), Some("🗑 Game dihapus."));

    let ids: Vec<_> = h.store.collection::<Game>().list().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![keep]);
}

#[test]
fn declined_delete_changes_nothing() {
    let h = harness();
    let games = h.site.games();
    let id = added(games.submit(&game_form("Stay")).unwrap());
    let before = h.store.get_item("yoloo_games").unwrap();
    let html_before = h.document.inner_html("allGames");

    let asked = std::cell::RefCell::new(Vec::new());
    let confirm = |message: &str| {
        asked.borrow_mut().push(message.to_string());
        decline(message)
    };
    assert_eq!(games.delete(id, &confirm).unwrap(), DeleteOutcome::Cancelled);

    assert_eq!(*asked.borrow(), vec!["Hapus game ini?".to_string()]);
    assert_eq!(h.store.get_item("yoloo_games").unwrap(), before);
    assert_eq!(h.document.inner_html("allGames"), html_before);
    assert_eq!(count(&h.document, "gameCount"), 1);
}

#[test]
fn deleting_last_record_shows_placeholder() {
    let h = harness();
    let games = h.site.games();
    let id = added(games.submit(&game_form("Only")).unwrap());
    games.delete(id, &accept).unwrap();

    assert_eq!(h.document.text("gameCount").as_deref(), Some("0 game"));
    assert!(h.document.inner_html("allGames").unwrap().contains("yl-empty-state"));
}

#[test]
fn overlay_click_closes_game_modal() {
    let h = harness();
    let games = h.site.games();
    games.open_modal();
    h.document.fill_form("addGameForm", game_form("Draft"));

    assert!(!games.overlay_click("allGames"));
    assert!(games.overlay_click("gameModal"));
    assert!(!h.site.modal().is_open("gameModal"));
    assert!(h.document.form("addGameForm").unwrap().is_empty());
}

fn added<R>(outcome: SubmitOutcome<R>) -> yoloo_site::RecordId {
    match outcome {
        SubmitOutcome::Added(entry) => entry.id,
        SubmitOutcome::Rejected(e) => panic!("unexpected rejection: {}", e),
    }
}

#[test]
fn concurrent_submissions_keep_every_game() {
    let h = harness();
    std::thread::scope(|scope| {
        for worker in 0..4 {
            let site = &h.site;
            scope.spawn(move || {
                for i in 0..10 {
                    site.games()
                        .submit(&game_form(&format!("W{}-{}", worker, i)))
                        .unwrap();
                }
            });
        }
    });

    assert_eq!(h.store.collection::<Game>().len(), 40);
    assert_eq!(count(&h.document, "gameCount"), 40);
}
