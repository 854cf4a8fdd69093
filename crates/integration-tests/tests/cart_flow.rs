//! Integration tests for the cart lifecycle.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied (`sg-cli migrate`)
//! - A seeded product catalog (`sg-cli seed`)
//! - The API server running (`cargo run -p seagrape-api`)
//!
//! Run with: `cargo test -p seagrape-integration-tests -- --ignored`

use reqwest::StatusCode;
use serde_json::Value;

use seagrape_integration_tests::TestContext;

/// Fetch the cart item array for a token.
async fn cart_items(ctx: &TestContext, token: &str) -> Vec<Value> {
    let resp = ctx
        .client
        .get(ctx.url("/api/cart"))
        .bearer_auth(token)
        .send()
        .await
        .expect("cart request");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("cart body");
    body.as_array().expect("cart is an array").clone()
}

#[tokio::test]
#[ignore = "Requires running API server and seeded database"]
async fn cart_starts_empty_and_first_read_creates_it() {
    let ctx = TestContext::new();
    let (_, token) = ctx.register_and_login().await;

    // First read: empty, and the cart record now exists.
    assert_eq!(cart_items(&ctx, &token).await, Vec::<Value>::new());

    // An update against the (now existing) empty cart reports a missing
    // item, not a missing cart.
    let product_id = ctx.any_product_id().await;
    let resp = ctx
        .client
        .put(ctx.url(&format!("/api/cart/{product_id}")))
        .bearer_auth(&token)
        .json(&serde_json::json!({"quantity": 2}))
        .send()
        .await
        .expect("update request");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = resp.json().await.expect("error body");
    assert_eq!(body["message"], "item not found in cart");
}

#[tokio::test]
#[ignore = "Requires running API server and seeded database"]
async fn add_merges_update_replaces_remove_empties() {
    let ctx = TestContext::new();
    let (_, token) = ctx.register_and_login().await;
    let product_id = ctx.any_product_id().await;

    // Add 2: one line with quantity 2.
    let resp = ctx
        .client
        .post(ctx.url("/api/cart"))
        .bearer_auth(&token)
        .json(&serde_json::json!({"productId": product_id, "quantity": 2}))
        .send()
        .await
        .expect("add request");
    assert_eq!(resp.status(), StatusCode::OK);
    let cart: Value = resp.json().await.expect("cart body");
    assert_eq!(cart["items"][0]["productId"], product_id);
    assert_eq!(cart["items"][0]["quantity"], 2);

    // Add 3 more of the same product: merged to 5, still one line.
    let resp = ctx
        .client
        .post(ctx.url("/api/cart"))
        .bearer_auth(&token)
        .json(&serde_json::json!({"productId": product_id, "quantity": 3}))
        .send()
        .await
        .expect("add request");
    let cart: Value = resp.json().await.expect("cart body");
    let items = cart["items"].as_array().expect("items");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["quantity"], 5);

    // Update to 1: replaced, not merged.
    let resp = ctx
        .client
        .put(ctx.url(&format!("/api/cart/{product_id}")))
        .bearer_auth(&token)
        .json(&serde_json::json!({"quantity": 1}))
        .send()
        .await
        .expect("update request");
    assert_eq!(resp.status(), StatusCode::OK);
    let cart: Value = resp.json().await.expect("cart body");
    assert_eq!(cart["items"][0]["quantity"], 1);

    // Remove: cart is empty again.
    let resp = ctx
        .client
        .delete(ctx.url(&format!("/api/cart/{product_id}")))
        .bearer_auth(&token)
        .send()
        .await
        .expect("remove request");
    assert_eq!(resp.status(), StatusCode::OK);
    let cart: Value = resp.json().await.expect("cart body");
    assert_eq!(cart["items"].as_array().expect("items").len(), 0);
}

#[tokio::test]
#[ignore = "Requires running API server and seeded database"]
async fn removing_an_absent_item_is_a_noop() {
    let ctx = TestContext::new();
    let (_, token) = ctx.register_and_login().await;
    let product_id = ctx.any_product_id().await;

    // Create the cart, then remove a product that was never added - twice.
    assert_eq!(cart_items(&ctx, &token).await.len(), 0);

    for _ in 0..2 {
        let resp = ctx
            .client
            .delete(ctx.url(&format!("/api/cart/{product_id}")))
            .bearer_auth(&token)
            .send()
            .await
            .expect("remove request");
        assert_eq!(resp.status(), StatusCode::OK);
    }
}

#[tokio::test]
#[ignore = "Requires running API server and seeded database"]
async fn adding_unknown_product_fails_and_does_not_mutate_cart() {
    let ctx = TestContext::new();
    let (_, token) = ctx.register_and_login().await;

    let resp = ctx
        .client
        .post(ctx.url("/api/cart"))
        .bearer_auth(&token)
        .json(&serde_json::json!({"productId": 999_999_999, "quantity": 1}))
        .send()
        .await
        .expect("add request");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = resp.json().await.expect("error body");
    assert_eq!(body["message"], "product not found");

    assert_eq!(cart_items(&ctx, &token).await.len(), 0);
}

#[tokio::test]
#[ignore = "Requires running API server and seeded database"]
async fn update_and_remove_without_a_cart_are_404() {
    let ctx = TestContext::new();
    let (_, token) = ctx.register_and_login().await;
    let product_id = ctx.any_product_id().await;

    // No GET or POST yet, so this user has no cart at all.
    let resp = ctx
        .client
        .put(ctx.url(&format!("/api/cart/{product_id}")))
        .bearer_auth(&token)
        .json(&serde_json::json!({"quantity": 1}))
        .send()
        .await
        .expect("update request");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.expect("error body");
    assert_eq!(body["message"], "cart not found");

    let resp = ctx
        .client
        .delete(ctx.url(&format!("/api/cart/{product_id}")))
        .bearer_auth(&token)
        .send()
        .await
        .expect("remove request");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running API server and seeded database"]
async fn zero_quantity_is_rejected_on_add_and_update() {
    let ctx = TestContext::new();
    let (_, token) = ctx.register_and_login().await;
    let product_id = ctx.any_product_id().await;

    let resp = ctx
        .client
        .post(ctx.url("/api/cart"))
        .bearer_auth(&token)
        .json(&serde_json::json!({"productId": product_id, "quantity": 0}))
        .send()
        .await
        .expect("add request");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Put a real line in place, then try to zero it out.
    let resp = ctx
        .client
        .post(ctx.url("/api/cart"))
        .bearer_auth(&token)
        .json(&serde_json::json!({"productId": product_id, "quantity": 2}))
        .send()
        .await
        .expect("add request");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = ctx
        .client
        .put(ctx.url(&format!("/api/cart/{product_id}")))
        .bearer_auth(&token)
        .json(&serde_json::json!({"quantity": 0}))
        .send()
        .await
        .expect("update request");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // The line is untouched.
    let items = cart_items(&ctx, &token).await;
    assert_eq!(items[0]["quantity"], 2);
}
