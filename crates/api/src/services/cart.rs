//! Cart service.
//!
//! Business rules for the per-user cart:
//!
//! - Carts are created lazily by [`CartService::ensure_cart`]; a read may
//!   therefore cause a write, and that is part of the contract.
//! - Adding a product already in the cart merges quantities instead of
//!   creating a duplicate line (merge-on-add).
//! - Updating replaces the quantity outright and requires both the cart
//!   and the line to exist.
//! - Removing an absent product is a no-op, not an error.

use sqlx::PgPool;
use thiserror::Error;

use seagrape_core::{ProductId, Quantity, UserId};

use crate::db::RepositoryError;
use crate::db::carts::CartRepository;
use crate::db::products::ProductRepository;
use crate::models::cart::Cart;

/// Errors that can occur during cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The referenced product is not in the catalog.
    #[error("product not found")]
    ProductNotFound,

    /// The user has no cart yet.
    #[error("cart not found")]
    CartNotFound,

    /// The cart exists but has no line for the product.
    #[error("item not found in cart")]
    ItemNotFound,

    /// Database operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Cart business logic.
pub struct CartService<'a> {
    carts: CartRepository<'a>,
    products: ProductRepository<'a>,
}

impl<'a> CartService<'a> {
    /// Create a new cart service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            carts: CartRepository::new(pool),
            products: ProductRepository::new(pool),
        }
    }

    /// Get the user's cart, creating an empty one if none exists.
    ///
    /// The create is persisted immediately even when nothing was added, so
    /// a cart record exists for the user after the first read.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Repository` if a database operation fails.
    pub async fn ensure_cart(&self, user_id: UserId) -> Result<Cart, CartError> {
        let cart_id = self.carts.ensure(user_id).await?;
        let items = self.carts.items(cart_id).await?;

        Ok(Cart {
            id: cart_id,
            user_id,
            items,
        })
    }

    /// Add a quantity of a product to the user's cart.
    ///
    /// Creates the cart if absent. If the product is already in the cart,
    /// the given quantity is added to the existing line (merge, not
    /// replace).
    ///
    /// # Errors
    ///
    /// Returns `CartError::ProductNotFound` if the product doesn't exist;
    /// the cart is left untouched in that case.
    /// Returns `CartError::Repository` if a database operation fails.
    pub async fn add_item(
        &self,
        user_id: UserId,
        product_id: ProductId,
        quantity: Quantity,
    ) -> Result<Cart, CartError> {
        // Catalog check first: a failed add must not create or touch the cart.
        if !self.products.exists(product_id).await? {
            return Err(CartError::ProductNotFound);
        }

        let cart_id = self.carts.ensure(user_id).await?;
        self.carts.upsert_item(cart_id, product_id, quantity).await?;

        let items = self.carts.items(cart_id).await?;
        Ok(Cart {
            id: cart_id,
            user_id,
            items,
        })
    }

    /// Replace the quantity of a product already in the user's cart.
    ///
    /// # Errors
    ///
    /// Returns `CartError::CartNotFound` if the user has no cart.
    /// Returns `CartError::ItemNotFound` if the product isn't in the cart.
    /// Returns `CartError::Repository` if a database operation fails.
    pub async fn update_quantity(
        &self,
        user_id: UserId,
        product_id: ProductId,
        quantity: Quantity,
    ) -> Result<Cart, CartError> {
        let cart_id = self
            .carts
            .find(user_id)
            .await?
            .ok_or(CartError::CartNotFound)?;

        self.carts
            .set_quantity(cart_id, product_id, quantity)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ItemNotFound,
                other => CartError::Repository(other),
            })?;

        let items = self.carts.items(cart_id).await?;
        Ok(Cart {
            id: cart_id,
            user_id,
            items,
        })
    }

    /// Remove a product from the user's cart.
    ///
    /// Removing a product that was never in the cart is a no-op and still
    /// returns the cart unchanged.
    ///
    /// # Errors
    ///
    /// Returns `CartError::CartNotFound` if the user has no cart.
    /// Returns `CartError::Repository` if a database operation fails.
    pub async fn remove_item(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<Cart, CartError> {
        let cart_id = self
            .carts
            .find(user_id)
            .await?
            .ok_or(CartError::CartNotFound)?;

        self.carts.delete_item(cart_id, product_id).await?;

        let items = self.carts.items(cart_id).await?;
        Ok(Cart {
            id: cart_id,
            user_id,
            items,
        })
    }
}
