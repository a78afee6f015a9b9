//! Store page.

use yoloo_site::{CollectionsExt, KeyValueStore, Product, SubmitOutcome, ValidationError, TOAST_ID};

use crate::support::{count, harness, product_form};

#[test]
fn product_card_formats_price_and_links_marketplace() {
    let h = harness();
    let products = h.site.products();
    products.init();
    assert_eq!(h.document.text("storeCount").as_deref(), Some("0 produk"));

    products.submit(&product_form("Kaos Yoloo", "125000")).unwrap();

    assert_eq!(h.document.text("storeCount").as_deref(), Some("1 produk"));
    let html = h.document.inner_html("allProducts").unwrap();
    assert!(html.contains(r#"<div class="store-card-price">Rp 125.000</div>"#));
    assert!(html.contains(r#"href="https://shop.example/item""#));
    assert!(html.contains("🛍 Pesan Sekarang"));
    assert!(html.contains(r#"<span class="yl-genre-tag">Merch</span>"#));
    assert_eq!(
        h.document.text(TOAST_ID).as_deref(),
        Some("✅ Produk berhasil ditambahkan!")
    );
}

#[test]
fn missing_marketplace_uses_store_message() {
    let h = harness();
    let outcome = h
        .site
        .products()
        .submit(&product_form("Mug", "45000").with("productMarketplace", " "))
        .unwrap();

    assert_eq!(
        outcome,
        SubmitOutcome::Rejected(ValidationError::MissingFields(vec!["productMarketplace"]))
    );
    assert_eq!(
        h.document.text(TOAST_ID).as_deref(),
        Some("Harap isi nama, harga, dan link marketplace!")
    );
    assert_eq!(count(&h.document, "storeCount"), 0);
}

#[test]
fn non_numeric_price_is_rejected() {
    let h = harness();
    let outcome = h
        .site
        .products()
        .submit(&product_form("Mug", "gratis"))
        .unwrap();

    assert!(matches!(
        outcome,
        SubmitOutcome::Rejected(ValidationError::InvalidPrice(_))
    ));
    assert!(h.store.collection::<Product>().is_empty());
}

#[test]
fn legacy_products_render_next_to_new_ones() {
    let h = harness();
    h.store
        .set_item(
            "yoloo_products",
            r#"[{"name":"Stiker","price":"15000","category":"","desc":"Tahan air","image":"","marketplace":"https://m.example/s","id":1700000000000,"createdAt":"2023-11-14T22:13:20.000Z"}]"#
                .into(),
        )
        .unwrap();

    let products = h.site.products();
    products.submit(&product_form("Topi", "80000")).unwrap();

    let stored = h.store.collection::<Product>().list();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].fields.name, "Topi");
    assert_eq!(stored[1].fields.price.amount(), 15_000.0);

    let html = h.document.inner_html("allProducts").unwrap();
    assert!(html.contains("Rp 15.000"));
    assert!(html.contains(r#"<p class="store-card-desc">Tahan air</p>"#));
}
