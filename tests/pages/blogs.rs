//! Blog page.

use yoloo_site::{DeleteOutcome, RecordId, SubmitOutcome, TOAST_ID};

use crate::support::{accept, blog_form, count, harness};

#[test]
fn article_card_shows_localized_creation_date() {
    let h = harness();
    let blogs = h.site.blogs();
    blogs.init();
    assert_eq!(h.document.text("blogCount").as_deref(), Some("0 artikel"));

    blogs.submit(&blog_form("Rilis 1.0")).unwrap();

    assert_eq!(h.document.text("blogCount").as_deref(), Some("1 artikel"));
    let html = h.document.inner_html("allBlogs").unwrap();
    // Clock sits at 2026-10-18 02:00 UTC, 09:00 WIB.
    assert!(html.contains(r#"<div class="yl-date-tag">18 Oktober 2026</div>"#));
    assert!(html.contains("Catatan rilis minggu ini"));
    assert!(html.contains("handleDeleteBlog("));
    assert_eq!(
        h.document.text(TOAST_ID).as_deref(),
        Some("✅ Artikel berhasil ditambahkan!")
    );
}

#[test]
fn missing_content_is_rejected() {
    let h = harness();
    let outcome = h
        .site
        .blogs()
        .submit(&blog_form("Judul").with("blogContent", ""))
        .unwrap();

    assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
    assert_eq!(count(&h.document, "blogCount"), 0);
    assert_eq!(
        h.document.text(TOAST_ID).as_deref(),
        Some("Harap isi semua field wajib!")
    );
}

#[test]
fn delete_unknown_id_still_rerenders() {
    let h = harness();
    let blogs = h.site.blogs();
    blogs.submit(&blog_form("Tetap")).unwrap();

    let outcome = blogs.delete(RecordId::new(42), &accept).unwrap();
    assert_eq!(outcome, DeleteOutcome::Missing);
    assert_eq!(count(&h.document, "blogCount"), 1);
    assert_eq!(h.document.text(TOAST_ID).as_deref(), Some("🗑 Artikel dihapus."));
}

#[test]
fn delete_asks_with_article_message() {
    let h = harness();
    let blogs = h.site.blogs();
    let id = match blogs.submit(&blog_form("Hapus saya")).unwrap() {
        SubmitOutcome::Added(entry) => entry.id,
        SubmitOutcome::Rejected(e) => panic!("unexpected rejection: {}", e),
    };

    let confirm = |message: &str| message == "Hapus artikel ini?";
    assert_eq!(blogs.delete(id, &confirm).unwrap(), DeleteOutcome::Deleted);
    assert_eq!(count(&h.document, "blogCount"), 0);
}
