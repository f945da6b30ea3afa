// src/tests/router_tests/reservations_tests.rs
use crate::router::handle;
use crate::tests::utils::*;

fn fake() -> FakeApi {
    FakeApi::new().with_reservations(vec![
        reservation(1, "Kayak tour", "Ana", "pending", "2024-04-01 10:00:00"),
        reservation(2, "Sunset cruise", "Beto", "approved", "2024-04-02 10:00:00"),
        reservation(3, "Kayak tour", "Carla", "canceled", "2024-04-03 10:00:00"),
    ])
}

const VALID: &str = "start_date=2024-07-01&end_date=2024-07-04&people_count=3\
&additional_people_count=1&babies_count=0&pets_count=0&user_id=51&post_id=71&status=approved";

#[test]
fn search_covers_offer_and_client() {
    let fake = fake();

    let rows = table_rows(&body_string(handle(get("/reservations?q=kayak"), &app(&fake)).unwrap()));
    assert_eq!(rows.len(), 2);

    let rows = table_rows(&body_string(handle(get("/reservations?q=beto@"), &app(&fake)).unwrap()));
    assert_eq!(rows.len(), 1);
    assert!(rows[0].contains("Sunset cruise"));
}

#[test]
fn status_filter_and_search_can_exclude_everything() {
    let fake = fake();
    let body = body_string(handle(get("/reservations?status=approved&q=kayak"), &app(&fake)).unwrap());
    assert!(body.contains("No records found."));
}

#[test]
fn sort_by_client_name() {
    let fake = fake();
    let rows = table_rows(&body_string(handle(get("/reservations?sort=client&dir=desc"), &app(&fake)).unwrap()));
    assert!(rows[0].contains("Carla Guest"));
    assert!(rows[2].contains("Ana Guest"));
}

#[test]
fn edit_rejects_zero_people() {
    let fake = fake();
    let body = VALID.replace("people_count=3", "people_count=0");
    let resp = handle(post_form("/reservations/2/edit", &body), &app(&fake)).unwrap();

    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("At least one person is required"));
    assert_eq!(fake.reservation(2).unwrap().people_count, 2);
}

#[test]
fn valid_edit_updates_reservation() {
    let fake = fake();
    let resp = handle(post_form("/reservations/1/edit", VALID), &app(&fake)).unwrap();

    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), "/reservations/1");
    let saved = fake.reservation(1).unwrap();
    assert_eq!(saved.people_count, 3);
    assert_eq!(saved.status, "approved");
    assert_eq!(fake.calls(), vec!["update_reservation 1 approved".to_string()]);
}

#[test]
fn edit_form_selects_current_status() {
    let fake = fake();
    let body = body_string(handle(get("/reservations/3/edit"), &app(&fake)).unwrap());
    assert!(body.contains(r#"<option value="canceled" selected>"#));
    assert!(body.contains(r#"value="2024-07-01""#));
}
