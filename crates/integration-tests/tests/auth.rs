//! Integration tests for authentication and the token gate.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied (`sg-cli migrate`)
//! - The API server running (`cargo run -p seagrape-api`)
//!
//! Run with: `cargo test -p seagrape-integration-tests -- --ignored`

use reqwest::StatusCode;
use serde_json::Value;
use uuid::Uuid;

use seagrape_integration_tests::TestContext;

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn missing_token_is_401_with_message() {
    let ctx = TestContext::new();

    let resp = ctx
        .client
        .get(ctx.url("/api/cart"))
        .send()
        .await
        .expect("cart request");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = resp.json().await.expect("error body");
    assert_eq!(body["message"], "access denied: no token provided");
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn garbage_token_is_400_with_message() {
    let ctx = TestContext::new();

    let resp = ctx
        .client
        .get(ctx.url("/api/cart"))
        .bearer_auth("definitely-not-a-jwt")
        .send()
        .await
        .expect("cart request");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.expect("error body");
    assert_eq!(body["message"], "invalid token");
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn register_login_and_use_token() {
    let ctx = TestContext::new();
    let (_, token) = ctx.register_and_login().await;

    let resp = ctx
        .client
        .get(ctx.url("/api/cart"))
        .bearer_auth(&token)
        .send()
        .await
        .expect("cart request");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn duplicate_username_is_409() {
    let ctx = TestContext::new();
    let username = format!("it-{}", Uuid::new_v4().simple());
    let body = serde_json::json!({"username": username, "password": "long enough pw"});

    let resp = ctx
        .client
        .post(ctx.url("/api/auth/register"))
        .json(&body)
        .send()
        .await
        .expect("register request");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = ctx
        .client
        .post(ctx.url("/api/auth/register"))
        .json(&body)
        .send()
        .await
        .expect("register request");
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn wrong_password_is_401() {
    let ctx = TestContext::new();
    let (username, _) = ctx.register_and_login().await;

    let resp = ctx
        .client
        .post(ctx.url("/api/auth/login"))
        .json(&serde_json::json!({"username": username, "password": "wrong password"}))
        .send()
        .await
        .expect("login request");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = resp.json().await.expect("error body");
    assert_eq!(body["message"], "invalid credentials");
}
