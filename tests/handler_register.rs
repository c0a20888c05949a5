//! Handler tests for URL registration, including the end-to-end account
//! scenario.

mod common;
use common::AuthBasicExt;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;

#[tokio::test]
async fn test_register_requires_authentication() {
    let env = common::create_test_env();
    let server = TestServer::new(common::app(env.state.clone())).unwrap();

    let response = server
        .post("/register")
        .json(&json!({ "url": "http://example.com" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_rejects_wrong_password() {
    let env = common::create_test_env();
    common::create_test_account(&env.state, "alice").await;

    let server = TestServer::new(common::app(env.state.clone())).unwrap();

    let response = server
        .post("/register")
        .authorization_basic("alice", "wrong-password")
        .json(&json!({ "url": "http://example.com" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_returns_short_url() {
    let env = common::create_test_env();
    let alice_pw = common::create_test_account(&env.state, "alice").await;

    let server = TestServer::new(common::app(env.state.clone())).unwrap();

    let response = server
        .post("/register")
        .authorization_basic("alice", &alice_pw)
        .json(&json!({ "url": "http://example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    let short_url = body["shortUrl"].as_str().unwrap();

    let prefix = format!("{}/", common::TEST_BASE_URL);
    let short_id = short_url.strip_prefix(&prefix).unwrap();
    assert_eq!(short_id.len(), 8);
    assert!(short_id.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[tokio::test]
async fn test_register_rejects_malformed_url() {
    let env = common::create_test_env();
    let alice_pw = common::create_test_account(&env.state, "alice").await;

    let server = TestServer::new(common::app(env.state.clone())).unwrap();

    let response = server
        .post("/register")
        .authorization_basic("alice", &alice_pw)
        .json(&json!({ "url": "not-a-url" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_rejects_invalid_redirect_type() {
    let env = common::create_test_env();
    let alice_pw = common::create_test_account(&env.state, "alice").await;

    let server = TestServer::new(common::app(env.state.clone())).unwrap();

    let response = server
        .post("/register")
        .authorization_basic("alice", &alice_pw)
        .json(&json!({ "url": "http://example.com", "redirectType": 307 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

/// End-to-end scenario: open an account, register the same URL twice, watch
/// the statistics count climb.
#[tokio::test]
async fn test_account_registration_statistics_scenario() {
    let env = common::create_test_env();
    let server = TestServer::new(common::app(env.state.clone())).unwrap();

    // Open the account.
    let response = server
        .post("/account")
        .json(&json!({ "AccountId": "alice" }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let password = response.json::<serde_json::Value>()["password"]
        .as_str()
        .unwrap()
        .to_string();
    assert_eq!(password.len(), 8);

    // Register a URL with the default redirect type.
    let response = server
        .post("/register")
        .authorization_basic("alice", &password)
        .json(&json!({ "url": "http://example.com" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    assert!(
        response.json::<serde_json::Value>()["shortUrl"]
            .as_str()
            .unwrap()
            .starts_with(common::TEST_BASE_URL)
    );

    // Statistics report a single registration.
    let response = server
        .get("/statistic/alice")
        .authorization_basic("alice", &password)
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "http://example.com": 1 })
    );

    // A second registration of the same URL brings the count to 2.
    server
        .post("/register")
        .authorization_basic("alice", &password)
        .json(&json!({ "url": "http://example.com" }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .get("/statistic/alice")
        .authorization_basic("alice", &password)
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "http://example.com": 2 })
    );
}
