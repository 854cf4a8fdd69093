//! Integration tests for Seagrape.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and apply migrations + seed data
//! sg-cli migrate && sg-cli seed
//!
//! # Start the API
//! cargo run -p seagrape-api
//!
//! # Run integration tests
//! cargo test -p seagrape-integration-tests -- --ignored
//! ```
//!
//! Every test is `#[ignore]`-gated because it needs a running server and a
//! seeded database; `SEAGRAPE_BASE_URL` overrides the default target of
//! `http://localhost:5000`.

use reqwest::Client;
use uuid::Uuid;

/// Shared context for driving the API over HTTP.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
}

impl TestContext {
    /// Build a context pointing at the server under test.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be constructed.
    #[must_use]
    pub fn new() -> Self {
        let base_url =
            std::env::var("SEAGRAPE_BASE_URL").unwrap_or_else(|_| "http://localhost:5000".into());

        Self {
            client: Client::builder().build().expect("Failed to create HTTP client"),
            base_url,
        }
    }

    /// Absolute URL for an API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Register a fresh throwaway user and return `(username, token)`.
    ///
    /// # Panics
    ///
    /// Panics if registration or login fails; tests can't proceed without
    /// an authenticated identity.
    pub async fn register_and_login(&self) -> (String, String) {
        let username = format!("it-{}", Uuid::new_v4().simple());
        let password = "integration-test-pw";

        let resp = self
            .client
            .post(self.url("/api/auth/register"))
            .json(&serde_json::json!({"username": username, "password": password}))
            .send()
            .await
            .expect("register request");
        assert!(
            resp.status().is_success(),
            "registration failed: {}",
            resp.status()
        );

        let resp = self
            .client
            .post(self.url("/api/auth/login"))
            .json(&serde_json::json!({"username": username, "password": password}))
            .send()
            .await
            .expect("login request");
        assert!(resp.status().is_success(), "login failed: {}", resp.status());

        let body: serde_json::Value = resp.json().await.expect("login body");
        let token = body
            .get("token")
            .and_then(serde_json::Value::as_str)
            .expect("token in login response")
            .to_owned();

        (username, token)
    }

    /// Pick a product ID from the seeded catalog.
    ///
    /// # Panics
    ///
    /// Panics if the catalog is empty; run `sg-cli seed` first.
    pub async fn any_product_id(&self) -> i64 {
        let resp = self
            .client
            .get(self.url("/api/products"))
            .send()
            .await
            .expect("products request");
        let body: serde_json::Value = resp.json().await.expect("products body");

        body.as_array()
            .and_then(|products| products.first())
            .and_then(|p| p.get("id"))
            .and_then(serde_json::Value::as_i64)
            .expect("seeded catalog must not be empty (run `sg-cli seed`)")
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
