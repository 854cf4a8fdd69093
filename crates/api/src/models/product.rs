//! Product domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use seagrape_core::ProductId;

/// A catalog product (domain type).
///
/// Read-only from the cart's perspective; carts only reference products by
/// ID and never modify them.
#[derive(Debug, Clone)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Optional long description.
    pub description: Option<String>,
    /// Unit price.
    pub price: Decimal,
    /// When the product was added to the catalog.
    pub created_at: DateTime<Utc>,
}
