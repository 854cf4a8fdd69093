//! Cart route handlers.
//!
//! All four handlers require a verified bearer token and operate on the
//! calling user's cart only. Success responses return 200 with JSON; the
//! collection endpoint returns the item array, the mutating endpoints
//! return the full cart object.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use seagrape_core::{CartId, ProductId, Quantity, UserId};

use crate::error::ApiError;
use crate::middleware::RequireUser;
use crate::models::cart::{Cart, CartItem};
use crate::services::cart::CartService;
use crate::state::AppState;

/// Add-item request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemBody {
    pub product_id: ProductId,
    pub quantity: i32,
}

/// Update-quantity request body.
#[derive(Debug, Deserialize)]
pub struct UpdateItemBody {
    pub quantity: i32,
}

/// One cart line on the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemView {
    pub product_id: ProductId,
    pub quantity: i32,
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product_id,
            quantity: item.quantity.as_i32(),
        }
    }
}

/// Full cart object on the wire.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub id: CartId,
    pub user_id: UserId,
    pub items: Vec<CartItemView>,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            id: cart.id,
            user_id: cart.user_id,
            items: cart.items.iter().map(CartItemView::from).collect(),
        }
    }
}

/// Parse a raw quantity from a request body.
fn parse_quantity(raw: i32) -> Result<Quantity, ApiError> {
    Quantity::new(raw).map_err(|e| ApiError::Validation(e.to_string()))
}

/// List the cart's items, creating an empty cart on first read.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    RequireUser(user_id): RequireUser,
) -> Result<Json<Vec<CartItemView>>, ApiError> {
    let cart = CartService::new(state.pool()).ensure_cart(user_id).await?;

    Ok(Json(cart.items.iter().map(CartItemView::from).collect()))
}

/// Add an item to the cart, merging quantity if already present.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    RequireUser(user_id): RequireUser,
    Json(body): Json<AddItemBody>,
) -> Result<Json<CartView>, ApiError> {
    let quantity = parse_quantity(body.quantity)?;

    let cart = CartService::new(state.pool())
        .add_item(user_id, body.product_id, quantity)
        .await?;

    Ok(Json(CartView::from(&cart)))
}

/// Replace the quantity of an item already in the cart.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    RequireUser(user_id): RequireUser,
    Path(product_id): Path<ProductId>,
    Json(body): Json<UpdateItemBody>,
) -> Result<Json<CartView>, ApiError> {
    let quantity = parse_quantity(body.quantity)?;

    let cart = CartService::new(state.pool())
        .update_quantity(user_id, product_id, quantity)
        .await?;

    Ok(Json(CartView::from(&cart)))
}

/// Remove an item from the cart. Removing an absent item is a no-op.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    RequireUser(user_id): RequireUser,
    Path(product_id): Path<ProductId>,
) -> Result<Json<CartView>, ApiError> {
    let cart = CartService::new(state.pool())
        .remove_item(user_id, product_id)
        .await?;

    Ok(Json(CartView::from(&cart)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_item_view_uses_camel_case() {
        let view = CartItemView {
            product_id: ProductId::new(7),
            quantity: 2,
        };
        let json = serde_json::to_value(&view).expect("serialize");
        assert_eq!(json, serde_json::json!({"productId": 7, "quantity": 2}));
    }

    #[test]
    fn cart_view_wire_shape() {
        let cart = Cart {
            id: CartId::new(1),
            user_id: UserId::new(9),
            items: vec![CartItem {
                product_id: ProductId::new(7),
                quantity: Quantity::new(5).expect("valid"),
            }],
        };

        let json = serde_json::to_value(CartView::from(&cart)).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "userId": 9,
                "items": [{"productId": 7, "quantity": 5}],
            })
        );
    }

    #[test]
    fn add_item_body_accepts_camel_case() {
        let body: AddItemBody =
            serde_json::from_value(serde_json::json!({"productId": 3, "quantity": 2}))
                .expect("deserialize");
        assert_eq!(body.product_id, ProductId::new(3));
        assert_eq!(body.quantity, 2);
    }

    #[test]
    fn non_positive_quantity_is_a_validation_error() {
        assert!(matches!(parse_quantity(0), Err(ApiError::Validation(_))));
        assert!(matches!(parse_quantity(-3), Err(ApiError::Validation(_))));
        assert_eq!(parse_quantity(4).expect("valid").as_i32(), 4);
    }
}
