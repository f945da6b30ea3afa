// src/tests/router_tests/offers_tests.rs
use crate::router::handle;
use crate::tests::utils::*;

fn fake() -> FakeApi {
    FakeApi::new().with_posts(vec![
        post(1, "Kayak tour", "active", "maria@mail.com", "2024-03-01 08:00:00"),
        post(2, "Sunset cruise", "inactive", "pedro@mail.com", "2024-03-05 08:00:00"),
        post(3, "Surf lessons", "draft", "maria@mail.com", "2024-02-20 08:00:00"),
        post(4, "City walk", "published", "luz@mail.com", "not a date"),
    ])
}

const VALID: &str = "title=Kayak+tour&subTitle=Two+hours&description=Paddle&price=55.5\
&expire_date=2025-10-01&status=active&established_quantity=8&cancellation_time=12";

#[test]
fn offers_default_to_newest_first() {
    let fake = fake();
    let rows = table_rows(&body_string(handle(get("/offers"), &app(&fake)).unwrap()));

    assert_eq!(rows.len(), 4);
    // An unparseable date ranks as text, after real dates; descending flips that.
    assert!(rows[0].contains("City walk"));
    assert!(rows[1].contains("Sunset cruise"));
    assert!(rows[2].contains("Kayak tour"));
    assert!(rows[3].contains("Surf lessons"));
}

#[test]
fn search_matches_owner_email() {
    let fake = fake();
    let rows = table_rows(&body_string(handle(get("/offers?q=maria"), &app(&fake)).unwrap()));
    assert_eq!(rows.len(), 2);
}

#[test]
fn status_filter_narrows_rows() {
    let fake = fake();
    let rows = table_rows(&body_string(handle(get("/offers?status=draft"), &app(&fake)).unwrap()));
    assert_eq!(rows.len(), 1);
    assert!(rows[0].contains("Surf lessons"));

    // "all" clears the filter
    let rows = table_rows(&body_string(handle(get("/offers?status=all"), &app(&fake)).unwrap()));
    assert_eq!(rows.len(), 4);
}

#[test]
fn price_ties_keep_fetch_order() {
    let fake = FakeApi::new().with_posts(vec![
        post(1, "Cheap", "active", "a@mail.com", "2024-01-01"),
        post(2, "Pricey", "active", "b@mail.com", "2024-01-02"),
    ]);
    let rows = table_rows(&body_string(handle(get("/offers?sort=price&dir=asc"), &app(&fake)).unwrap()));
    assert!(rows[0].contains("Cheap"));
    assert!(rows[0].contains("49.90"));
    assert!(rows[1].contains("Pricey"));
}

#[test]
fn toggle_status_flips_active_and_inactive() {
    let fake = fake();
    let resp = handle(post_form("/offers/1/status", ""), &app(&fake)).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), "/offers");
    assert_eq!(fake.post(1).unwrap().status, "inactive");

    handle(post_form("/offers/2/status", ""), &app(&fake)).unwrap();
    assert_eq!(fake.post(2).unwrap().status, "active");
}

#[test]
fn edit_requires_every_field() {
    let fake = fake();
    let resp = handle(post_form("/offers/1/edit", "title=&price=abc"), &app(&fake)).unwrap();

    assert_eq!(resp.status(), 400);
    let body = body_string(resp);
    assert!(body.contains("Title is required"));
    assert!(body.contains("Price is required"));
    assert!(body.contains("Expiry date is required"));
    assert!(fake.calls().is_empty());
}

#[test]
fn valid_edit_is_saved() {
    let fake = fake();
    let resp = handle(post_form("/offers/1/edit", VALID), &app(&fake)).unwrap();

    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), "/offers/1");
    let saved = fake.post(1).unwrap();
    assert_eq!(saved.sub_title, "Two hours");
    assert_eq!(saved.price, 55.5);
}

#[test]
fn export_returns_a_workbook() {
    let fake = fake();
    let resp = handle(get("/offers/export.xlsx?status=active"), &app(&fake)).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        header(&resp, "Content-Type"),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert!(header(&resp, "Content-Disposition").contains("offers_"));
}

#[test]
fn offer_detail_shows_owner() {
    let fake = fake();
    let body = body_string(handle(get("/offers/2"), &app(&fake)).unwrap());
    assert!(body.contains("Sunset cruise"));
    assert!(body.contains("pedro@mail.com"));
}

#[test]
fn offer_detail_shows_cover_and_gallery() {
    let mut with_images = post(5, "Boat trip", "active", "ana@mail.com", "2024-03-01 08:00:00");
    with_images.url_post = Some("covers/boat.jpg".into());
    with_images.images = vec!["g/1.jpg".into(), "g/2.jpg".into()];
    let fake = FakeApi::new().with_posts(vec![
        with_images,
        post(6, "Plain walk", "active", "luz@mail.com", "2024-03-02 08:00:00"),
    ]);
    let backoffice = app(&fake).with_image_base_url("https://img.test/public/images/");

    let body = body_string(handle(get("/offers/5"), &backoffice).unwrap());
    assert!(body.contains(r#"src="https://img.test/public/images/covers/boat.jpg""#));
    assert!(body.contains(r#"src="https://img.test/public/images/g/2.jpg""#));
    assert!(body.contains("Gallery"));

    let body = body_string(handle(get("/offers/6"), &backoffice).unwrap());
    assert!(!body.contains("<img"));
    assert!(!body.contains("Gallery"));
}
