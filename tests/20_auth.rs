mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{test_app, MINION, OVERSEER};

#[tokio::test]
async fn login_returns_token_in_envelope() {
    let app = test_app().await;
    let (status, body) = app
        .request(
            Method::POST,
            "/user/login",
            None,
            Some(json!({ "name": OVERSEER.0, "password": OVERSEER.1 })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["token"].as_str().unwrap().split('.').count(), 3);
}

#[tokio::test]
async fn login_rejects_bad_credentials_identically() {
    let app = test_app().await;

    for (name, password) in [(OVERSEER.0, "wrong"), ("nobody", OVERSEER.1)] {
        let (status, body) = app
            .request(Method::POST, "/user/login", None, Some(json!({ "name": name, "password": password })))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Invalid Credentials");
    }
}

#[tokio::test]
async fn token_validation_checks_the_query_token() {
    let app = test_app().await;
    let token = app.minion_token().await;
    let other = app.overseer_token().await;

    let (status, body) = app
        .request(Method::GET, &format!("/user/tokenvalidation?token={}", other), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], true);

    let (status, body) = app
        .request(Method::GET, "/user/tokenvalidation?token=garbage", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid token");

    let (status, _) = app.request(Method::GET, "/user/tokenvalidation", Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn token_validation_requires_authentication() {
    let app = test_app().await;
    let token = app.minion_token().await;

    let (status, _) = app
        .request(Method::GET, &format!("/user/tokenvalidation?token={}", token), None, None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn minions_cannot_write_or_read_single_mages() {
    let app = test_app().await;
    let token = app.login(MINION).await;
    let id = app.seed_mage("Harry Potter", (1980, 7, 31), 1, "HG-GR-000001").await;

    let (status, body) = app
        .request(
            Method::POST,
            "/mages",
            Some(&token),
            Some(common::mage_body("Ron Weasley", "1980-03-01", 1, "HG-GR-000002")),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "FORBIDDEN");

    let (status, _) = app.request(Method::GET, &format!("/mages/{}", id), Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app
        .request(
            Method::PUT,
            &format!("/mages/{}", id),
            Some(&token),
            Some(common::mage_body("Harry Potter", "1980-07-31", 1, "HG-GR-000001")),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(app.repo.mage_count().await, 1);
}

#[tokio::test]
async fn minions_can_read_listings() {
    let app = test_app().await;
    let token = app.minion_token().await;

    let (status, _) = app.request(Method::GET, "/houses", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.request(Method::GET, "/mages", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn malformed_login_body_gets_bad_request_envelope() {
    let app = test_app().await;
    let (status, body) = app
        .request(Method::POST, "/user/login", None, Some(json!({ "name": OVERSEER.0 })))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "BAD_REQUEST");
}
