//! Cart domain types.

use seagrape_core::{CartId, ProductId, Quantity, UserId};

/// One line of a cart: a product reference and how many of it.
///
/// A cart never holds two lines for the same product; adding a product that
/// is already present merges into the existing line instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    /// The referenced catalog product.
    pub product_id: ProductId,
    /// How many units, always at least 1.
    pub quantity: Quantity,
}

/// A user's cart (domain type).
///
/// Each user has at most one cart. Carts are created lazily on first read
/// or first add and persist indefinitely.
#[derive(Debug, Clone)]
pub struct Cart {
    /// Unique cart ID.
    pub id: CartId,
    /// The owning user.
    pub user_id: UserId,
    /// Cart lines in insertion order.
    pub items: Vec<CartItem>,
}
