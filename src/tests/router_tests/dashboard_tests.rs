// src/tests/router_tests/dashboard_tests.rs
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::*;

#[test]
fn dashboard_counts_each_resource() {
    let fake = FakeApi::new()
        .with_users(vec![user(1, "Ana", "Test", "verified", "user", "2024-01-01")])
        .with_categories(vec![
            category(1, "Boats", "Barcos", "2024-01-01"),
            category(2, "Bikes", "Bicis", "2024-01-02"),
        ]);

    let resp = handle(get("/"), &app(&fake)).unwrap();
    assert_eq!(resp.status(), 200);

    let doc = scraper::Html::parse_document(&body_string(resp));
    let counts: Vec<String> = doc
        .select(&scraper::Selector::parse(".tile .count").unwrap())
        .map(|e| e.text().collect())
        .collect();
    assert_eq!(counts, vec!["1", "0", "0", "2"]);
}

#[test]
fn dashboard_survives_api_outage() {
    let fake = FakeApi::new();
    fake.fail_lists();

    let body = body_string(handle(get("/"), &app(&fake)).unwrap());
    assert_eq!(body.matches("Unavailable").count(), 4);
}

#[test]
fn list_outage_shows_retry_link() {
    let fake = FakeApi::new();
    fake.fail_lists();

    let resp = handle(get("/users?q=ana"), &app(&fake)).unwrap();
    assert_eq!(resp.status(), 502);
    let body = body_string(resp);
    assert!(body.contains("connection refused"));
    assert!(body.contains(r#"href="/users?q=ana&amp;sort=created_at&amp;dir=desc""#));
}

#[test]
fn htmx_outage_still_swaps_in_the_message() {
    let fake = FakeApi::new();
    fake.fail_lists();

    let resp = handle(htmx_get("/offers"), &app(&fake)).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Retry"));
}

#[test]
fn export_during_outage_is_bad_gateway() {
    let fake = FakeApi::new();
    fake.fail_lists();

    match handle(get("/users/export.xlsx"), &app(&fake)) {
        Err(err @ ServerError::Upstream(_)) => assert_eq!(err.status(), 502),
        _ => panic!("expected an upstream error"),
    }
}

#[test]
fn unknown_paths_are_not_found() {
    let fake = FakeApi::new();
    for path in ["/nope", "/users/1/unknown", "/users/1/2/3"] {
        assert!(matches!(handle(get(path), &app(&fake)), Err(ServerError::NotFound)));
    }
    assert!(matches!(
        handle(post_form("/users", ""), &app(&fake)),
        Err(ServerError::NotFound)
    ));
}
