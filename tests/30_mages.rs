mod common;

use axum::http::{Method, StatusCode};
use chrono::{Datelike, Utc};

use common::{mage_body, test_app};

fn adult_birthdate() -> String {
    format!("{}-03-14", Utc::now().year() - 30)
}

#[tokio::test]
async fn create_returns_stored_mage() {
    let app = test_app().await;
    let token = app.overseer_token().await;
    let before = Utc::now();

    let (status, body) = app
        .request(
            Method::POST,
            "/mages",
            Some(&token),
            Some(mage_body("Hermione Granger", &adult_birthdate(), 1, "HG-GR-000001")),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED, "{}", body);
    let mage = &body["data"];
    assert_eq!(mage["mag_name"], "Hermione Granger");
    assert_eq!(mage["mag_hou_id"], 1);
    assert_eq!(mage["mag_aaln"], "HG-GR-000001");
    assert!(mage["mag_id"].as_i64().unwrap() > 0);

    let registered: chrono::DateTime<Utc> = mage["mag_inscription"].as_str().unwrap().parse().unwrap();
    assert!(registered >= before);
}

#[tokio::test]
async fn new_mage_alias_creates_too() {
    let app = test_app().await;
    let token = app.overseer_token().await;

    let (status, _) = app
        .request(
            Method::POST,
            "/newMage",
            Some(&token),
            Some(mage_body("Viktor Krum", &adult_birthdate(), 5, "OT-OT-000123")),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(app.repo.mage_count().await, 1);
}

#[tokio::test]
async fn create_reports_validation_failures() {
    let app = test_app().await;
    let token = app.overseer_token().await;
    let young = format!("{}-01-01", Utc::now().year() - 10);

    let cases = [
        (mage_body("Kid", &young, 1, "HG-GR-000001"), "The mage must be at least 16 years old"),
        (
            mage_body("Bad", &adult_birthdate(), 1, "HG-GR-1"),
            "Invalid AALN format. The format should be: AZ-AZ-123456",
        ),
        (
            mage_body("Wrong House", &adult_birthdate(), 3, "HG-GR-000001"),
            "The house indicated in the aaln does not coincide with the house of the mage",
        ),
        (
            mage_body("Wrong School", &adult_birthdate(), 4, "OT-SL-000001"),
            "For SL house, the school initials should be HG",
        ),
        (
            mage_body("Outsider", &adult_birthdate(), 5, "HG-OT-000001"),
            "For the OT house, the school initials should be OT",
        ),
    ];

    for (payload, message) in cases {
        let (status, body) = app.request(Method::POST, "/mages", Some(&token), Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", message);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], message);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    assert_eq!(app.repo.mage_count().await, 0);
}

#[tokio::test]
async fn duplicate_number_is_a_conflict() {
    let app = test_app().await;
    let token = app.overseer_token().await;
    app.seed_mage("Cedric Diggory", (1977, 9, 1), 2, "HG-HU-424242").await;

    let (status, body) = app
        .request(
            Method::POST,
            "/mages",
            Some(&token),
            Some(mage_body("Draco Malfoy", &adult_birthdate(), 4, "HG-SL-424242")),
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "AALN already exists");
}

#[tokio::test]
async fn get_returns_mage_or_404() {
    let app = test_app().await;
    let token = app.overseer_token().await;
    let id = app.seed_mage("Minerva McGonagall", (1935, 10, 4), 1, "HG-GR-000100").await;

    let (status, body) = app.request(Method::GET, &format!("/mages/{}", id), Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["mag_name"], "Minerva McGonagall");
    assert_eq!(body["data"]["mag_birthdate"], "1935-10-04");

    let (status, body) = app.request(Method::GET, "/mages/9999", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "There is no mage with this id");
}

#[tokio::test]
async fn update_replaces_fields_and_keeps_registration() {
    let app = test_app().await;
    let token = app.overseer_token().await;
    let id = app.seed_mage("Tom Riddle", (1926, 12, 31), 4, "HG-SL-000007").await;

    let (status, body) = app
        .request(
            Method::PUT,
            &format!("/mages/{}", id),
            Some(&token),
            Some(mage_body("Lord Voldemort", "1926-12-31", 4, "HG-SL-000007")),
        )
        .await;

    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["data"]["mag_id"], id);
    assert_eq!(body["data"]["mag_name"], "Lord Voldemort");
    assert_eq!(body["data"]["mag_inscription"], "2024-01-15T10:00:00Z");
}

#[tokio::test]
async fn update_validates_against_other_mages() {
    let app = test_app().await;
    let token = app.overseer_token().await;
    app.seed_mage("Harry Potter", (1980, 7, 31), 1, "HG-GR-000001").await;
    let ron = app.seed_mage("Ron Weasley", (1980, 3, 1), 1, "HG-GR-000002").await;

    let (status, _) = app
        .request(
            Method::PUT,
            &format!("/mages/{}", ron),
            Some(&token),
            Some(mage_body("Ron Weasley", "1980-03-01", 1, "HG-GR-000001")),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app
        .request(
            Method::PUT,
            "/mages/4242",
            Some(&token),
            Some(mage_body("Nobody", "1980-03-01", 1, "HG-GR-000003")),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_bodies_get_bad_request_envelope() {
    let app = test_app().await;
    let token = app.overseer_token().await;
    let id = app.seed_mage("Nymphadora Tonks", (1973, 3, 1), 2, "HG-HU-000500").await;

    let (status, body) = app
        .request(
            Method::POST,
            "/mages",
            Some(&token),
            Some(mage_body("Someone", "yesterday", 1, "HG-GR-000501")),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "BAD_REQUEST");

    let (status, body) = app
        .request(
            Method::PUT,
            &format!("/mages/{}", id),
            Some(&token),
            Some(serde_json::json!({ "mag_name": "Missing fields" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");

    assert_eq!(app.repo.mage_count().await, 1);
}

#[tokio::test]
async fn non_numeric_id_gets_bad_request_envelope() {
    let app = test_app().await;
    let token = app.overseer_token().await;

    let (status, body) = app.request(Method::GET, "/mages/abc", Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "BAD_REQUEST");
}
