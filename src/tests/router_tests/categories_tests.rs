// src/tests/router_tests/categories_tests.rs
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::*;

fn fake() -> FakeApi {
    FakeApi::new().with_categories(vec![
        category(1, "Boats", "Barcos", "2024-01-10 00:00:00"),
        category(2, "Hiking", "", "2024-01-11 00:00:00"),
    ])
}

#[test]
fn list_prefers_spanish_titles() {
    let fake = fake();
    let rows = table_rows(&body_string(handle(get("/categories"), &app(&fake)).unwrap()));

    assert_eq!(rows.len(), 2);
    assert!(rows[0].starts_with("Hiking"));
    assert!(rows[1].starts_with("Barcos"));
}

#[test]
fn list_has_no_filter_selects() {
    let fake = fake();
    let body = body_string(handle(get("/categories"), &app(&fake)).unwrap());
    assert!(!body.contains("<select"));
    assert!(body.contains(r#"name="q""#));
}

#[test]
fn create_needs_english_title() {
    let fake = fake();
    let resp = handle(post_form("/categories/create", "title_en=&title_es=Playa"), &app(&fake)).unwrap();

    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("English title is required"));
    assert!(fake.calls().is_empty());
}

#[test]
fn create_redirects_to_new_category() {
    let fake = fake();
    let resp = handle(post_form("/categories/create", "title_en=Beach"), &app(&fake)).unwrap();

    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), "/categories/3");
    assert_eq!(fake.category(3).unwrap().title_en, "Beach");
}

#[test]
fn edit_needs_both_titles() {
    let fake = fake();
    let resp = handle(post_form("/categories/1/edit", "title_en=Boats&title_es="), &app(&fake)).unwrap();
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("Spanish title is required"));

    let resp = handle(post_form("/categories/1/edit", "title_en=Boats&title_es=Lanchas"), &app(&fake)).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(fake.category(1).unwrap().title_es, "Lanchas");
}

#[test]
fn delete_removes_and_redirects() {
    let fake = fake();
    let resp = handle(post_form("/categories/2/delete", ""), &app(&fake)).unwrap();

    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), "/categories");
    assert!(fake.category(2).is_none());

    assert!(matches!(
        handle(post_form("/categories/2/delete", ""), &app(&fake)),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn create_form_renders() {
    let fake = fake();
    let body = body_string(handle(get("/categories/create"), &app(&fake)).unwrap());
    assert!(body.contains(r#"action="/categories/create""#));
}

#[test]
fn create_uploads_image_as_file() {
    let fake = fake();
    let png = [0x89, b'P', b'N', b'G', 0x0d, 0x0a];
    let req = post_multipart(
        "/categories/create",
        &[("title_en", "Beach"), ("title_es", "Playa")],
        Some(("image", "beach.png", "image/png", &png[..])),
    );
    let resp = handle(req, &app(&fake)).unwrap();

    assert_eq!(resp.status(), 302);
    let created = fake.category(3).unwrap();
    assert_eq!(created.title_es, "Playa");
    assert_eq!(created.image_url.as_deref(), Some("https://cdn.test/beach.png"));
}

#[test]
fn create_without_picking_a_file_still_works() {
    let fake = fake();
    let req = post_multipart(
        "/categories/create",
        &[("title_en", "Beach")],
        Some(("image", "", "application/octet-stream", &b""[..])),
    );
    let resp = handle(req, &app(&fake)).unwrap();

    assert_eq!(resp.status(), 302);
    assert_eq!(fake.category(3).unwrap().image_url, None);
}

#[test]
fn non_image_upload_is_rejected_with_the_form() {
    let fake = fake();
    let req = post_multipart(
        "/categories/create",
        &[("title_en", "Beach")],
        Some(("image", "notes.pdf", "application/pdf", &b"%PDF-1.4"[..])),
    );
    let resp = handle(req, &app(&fake)).unwrap();

    assert_eq!(resp.status(), 400);
    let body = body_string(resp);
    assert!(body.contains("Only image files are allowed"));
    assert!(body.contains(r#"value="Beach""#));
    assert!(fake.calls().is_empty());
}

#[test]
fn edit_can_replace_the_image() {
    let fake = fake();
    let req = post_multipart(
        "/categories/1/edit",
        &[("title_en", "Boats"), ("title_es", "Barcos")],
        Some(("image", "boat.jpg", "image/jpeg", &b"\xff\xd8\xff"[..])),
    );
    let resp = handle(req, &app(&fake)).unwrap();

    assert_eq!(resp.status(), 302);
    assert_eq!(fake.category(1).unwrap().image_url.as_deref(), Some("https://cdn.test/boat.jpg"));
}

#[test]
fn forms_ask_for_multipart_and_detail_shows_image() {
    let fake = fake();
    let body = body_string(handle(get("/categories/1/edit"), &app(&fake)).unwrap());
    assert!(body.contains(r#"enctype="multipart/form-data""#));
    assert!(body.contains(r#"type="file""#));

    let body = body_string(handle(get("/categories/1"), &app(&fake)).unwrap());
    assert!(body.contains("No image"));

    let req = post_multipart(
        "/categories/1/edit",
        &[("title_en", "Boats"), ("title_es", "Barcos")],
        Some(("image", "boat.jpg", "image/jpeg", &b"\xff\xd8\xff"[..])),
    );
    handle(req, &app(&fake)).unwrap();
    let body = body_string(handle(get("/categories/1"), &app(&fake)).unwrap());
    assert!(body.contains(r#"<img src="https://cdn.test/boat.jpg""#));
}

#[test]
fn oversized_form_is_refused_not_truncated() {
    let fake = fake();
    let long = "a".repeat(70 * 1024);
    let form = format!("title_en=Boats&title_es=Barcos&description_en={long}");

    let err = handle(post_form("/categories/1/edit", &form), &app(&fake)).unwrap_err();
    assert!(matches!(err, ServerError::PayloadTooLarge(_)));
    assert_eq!(err.status(), 413);
    assert!(fake.calls().is_empty());
    assert_eq!(fake.category(1).unwrap().description_en, None);
}
