//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                  - Liveness check
//! GET  /health/ready            - Readiness check (database probe)
//!
//! # Auth
//! POST /api/auth/register       - Create an account
//! POST /api/auth/login          - Exchange credentials for a bearer token
//!
//! # Products (public, read-only)
//! GET  /api/products            - Catalog listing
//! GET  /api/products/{id}       - Product detail
//!
//! # Cart (requires bearer token)
//! GET    /api/cart              - Cart items (creates the cart if absent)
//! POST   /api/cart              - Add item (merges quantity if present)
//! PUT    /api/cart/{productId}  - Replace item quantity
//! DELETE /api/cart/{productId}  - Remove item
//! ```

pub mod auth;
pub mod cart;
pub mod products;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::index).post(cart::add))
        .route("/{product_id}", put(cart::update).delete(cart::remove))
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/auth", auth_routes())
        .nest("/api/products", product_routes())
        .nest("/api/cart", cart_routes())
}
