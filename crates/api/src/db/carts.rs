//! Cart repository for database operations.
//!
//! A cart is one `carts` row per user plus one `cart_items` row per
//! product. Item order is insertion order (`cart_items.id` ascending).

use sqlx::PgPool;

use seagrape_core::{CartId, ProductId, Quantity, UserId};

use super::RepositoryError;
use crate::models::cart::CartItem;

#[derive(sqlx::FromRow)]
struct CartItemRow {
    product_id: ProductId,
    quantity: i32,
}

impl CartItemRow {
    fn into_item(self) -> Result<CartItem, RepositoryError> {
        let quantity = Quantity::new(self.quantity).map_err(|e| {
            RepositoryError::DataCorruption(format!(
                "invalid quantity {} in database: {e}",
                self.quantity
            ))
        })?;

        Ok(CartItem {
            product_id: self.product_id,
            quantity,
        })
    }
}

/// Repository for cart database operations.
pub struct CartRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get the ID of the user's cart, creating the cart if none exists.
    ///
    /// This is the one place a read path is allowed to write: a GET of the
    /// cart goes through here, so the lazy create is part of the contract
    /// rather than hidden inside a query.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn ensure(&self, user_id: UserId) -> Result<CartId, RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO carts (user_id)
            VALUES ($1)
            ON CONFLICT (user_id) DO NOTHING
            ",
        )
        .bind(user_id)
        .execute(self.pool)
        .await?;

        let id = sqlx::query_scalar::<_, CartId>(
            r"
            SELECT id FROM carts WHERE user_id = $1
            ",
        )
        .bind(user_id)
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }

    /// Find the user's cart ID without creating one.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find(&self, user_id: UserId) -> Result<Option<CartId>, RepositoryError> {
        let id = sqlx::query_scalar::<_, CartId>(
            r"
            SELECT id FROM carts WHERE user_id = $1
            ",
        )
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(id)
    }

    /// List a cart's items in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored quantity is below 1.
    pub async fn items(&self, cart_id: CartId) -> Result<Vec<CartItem>, RepositoryError> {
        let rows = sqlx::query_as::<_, CartItemRow>(
            r"
            SELECT product_id, quantity
            FROM cart_items
            WHERE cart_id = $1
            ORDER BY id ASC
            ",
        )
        .bind(cart_id)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(CartItemRow::into_item).collect()
    }

    /// Add a quantity to a cart line, inserting the line if absent.
    ///
    /// Merge-on-add runs as a single atomic upsert keyed on
    /// `(cart_id, product_id)`, so two concurrent adds for the same product
    /// both land; a read-modify-write of the whole cart could lose one.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn upsert_item(
        &self,
        cart_id: CartId,
        product_id: ProductId,
        quantity: Quantity,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO cart_items (cart_id, product_id, quantity)
            VALUES ($1, $2, $3)
            ON CONFLICT (cart_id, product_id)
            DO UPDATE SET quantity = cart_items.quantity + EXCLUDED.quantity
            ",
        )
        .bind(cart_id)
        .bind(product_id)
        .bind(quantity.as_i32())
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Replace the quantity of an existing cart line.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the line doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn set_quantity(
        &self,
        cart_id: CartId,
        product_id: ProductId,
        quantity: Quantity,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE cart_items
            SET quantity = $1
            WHERE cart_id = $2 AND product_id = $3
            ",
        )
        .bind(quantity.as_i32())
        .bind(cart_id)
        .bind(product_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Delete a cart line.
    ///
    /// # Returns
    ///
    /// Returns `true` if a line was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete_item(
        &self,
        cart_id: CartId,
        product_id: ProductId,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM cart_items
            WHERE cart_id = $1 AND product_id = $2
            ",
        )
        .bind(cart_id)
        .bind(product_id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
