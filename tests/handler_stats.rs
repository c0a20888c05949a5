//! Handler tests for per-account statistics.

mod common;
use common::AuthBasicExt;

use axum::http::StatusCode;
use axum_test::TestServer;
use linkvault::domain::entities::REDIRECT_TEMPORARY;
use serde_json::json;

#[tokio::test]
async fn test_statistics_require_authentication() {
    let env = common::create_test_env();
    common::create_test_account(&env.state, "alice").await;

    let server = TestServer::new(common::app(env.state.clone())).unwrap();

    let response = server.get("/statistic/alice").await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_statistics_unknown_account_is_not_found() {
    let env = common::create_test_env();
    let alice_pw = common::create_test_account(&env.state, "alice").await;

    let server = TestServer::new(common::app(env.state.clone())).unwrap();

    let response = server
        .get("/statistic/ghost")
        .authorization_basic("alice", &alice_pw)
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_statistics_group_registrations_by_url() {
    let env = common::create_test_env();
    let alice_pw = common::create_test_account(&env.state, "alice").await;

    for url in [
        "http://example.com",
        "http://example.com",
        "http://other.example",
    ] {
        env.state
            .registrations
            .register_url("alice", url.to_string(), REDIRECT_TEMPORARY)
            .await
            .unwrap();
    }

    let server = TestServer::new(common::app(env.state.clone())).unwrap();

    let response = server
        .get("/statistic/alice")
        .authorization_basic("alice", &alice_pw)
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "http://example.com": 2, "http://other.example": 1 })
    );
}

#[tokio::test]
async fn test_any_authenticated_account_may_query_statistics() {
    let env = common::create_test_env();
    common::create_test_account(&env.state, "alice").await;
    let bob_pw = common::create_test_account(&env.state, "bob").await;

    env.state
        .registrations
        .register_url("alice", "http://example.com".to_string(), REDIRECT_TEMPORARY)
        .await
        .unwrap();

    let server = TestServer::new(common::app(env.state.clone())).unwrap();

    // The statistics authority is granted per session, not per target
    // account: bob may read alice's counts.
    let response = server
        .get("/statistic/alice")
        .authorization_basic("bob", &bob_pw)
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "http://example.com": 1 })
    );
}
