//! Landing page previews.

use chrono::Duration;
use yoloo_site::{
    DisplayMode, BLOGS_MOUNT, BLOG_PREVIEW_EMPTY, GAMES_EMPTY_MOUNT, GAMES_TRACK_MOUNT,
};

use crate::support::{blog_form, game_form, harness};

#[test]
fn empty_collections_show_calls_to_action() {
    let h = harness();
    h.site.index().init();

    assert_eq!(h.document.inner_html(GAMES_TRACK_MOUNT).as_deref(), Some(""));
    assert_eq!(h.document.display(GAMES_EMPTY_MOUNT), Some(DisplayMode::Flex));
    assert!(h
        .document
        .inner_html(BLOGS_MOUNT)
        .unwrap()
        .contains(BLOG_PREVIEW_EMPTY));
}

#[test]
fn showcase_is_bounded_to_five_newest_games() {
    let h = harness();
    for i in 1..=7 {
        h.site.games().submit(&game_form(&format!("Game {}", i))).unwrap();
        h.clock.advance(Duration::seconds(1));
    }

    h.site.index().render_games_showcase();

    let track = h.document.inner_html(GAMES_TRACK_MOUNT).unwrap();
    assert_eq!(track.matches("game-showcase-item").count(), 5);
    assert!(track.contains("Game 7"));
    assert!(track.contains("Game 3"));
    assert!(!track.contains("Game 2"));
    assert!(track.starts_with(r#"<div class="game-showcase-item active-game" data-index="0">"#));
    assert_eq!(h.document.display(GAMES_EMPTY_MOUNT), Some(DisplayMode::None));
}

#[test]
fn blog_preview_has_three_articles_without_delete() {
    let h = harness();
    for i in 1..=4 {
        h.site.blogs().submit(&blog_form(&format!("Artikel {}", i))).unwrap();
    }

    h.site.index().render_blogs_preview();

    let html = h.document.inner_html(BLOGS_MOUNT).unwrap();
    assert_eq!(html.matches("blog-preview-card").count(), 3);
    assert!(!html.contains("Artikel 1"));
    assert!(!html.contains("yl-delete-btn"));
}

#[cfg(feature = "emitter")]
#[test]
fn showcase_listener_hears_item_count() {
    use std::sync::{Arc, Mutex};
    use std::thread;
    use std::time::{Duration as StdDuration, Instant};

    let h = harness();
    let heard = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&heard);
    h.site.on_showcase_rendered(move |count| {
        sink.lock().unwrap().push(count);
    });

    // Empty showcase: no notification.
    h.site.index().render_games_showcase();

    h.site.games().submit(&game_form("Celeste")).unwrap();
    h.site.games().submit(&game_form("Hades")).unwrap();
    h.site.index().render_games_showcase();

    // Listeners run on their own threads.
    let deadline = Instant::now() + StdDuration::from_secs(2);
    while heard.lock().unwrap().is_empty() && Instant::now() < deadline {
        thread::sleep(StdDuration::from_millis(5));
    }
    assert_eq!(*heard.lock().unwrap(), vec![2]);
}
