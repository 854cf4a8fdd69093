//! Product route handlers.
//!
//! Read-only catalog endpoints; the catalog is populated by `sg-cli seed`.

use axum::{
    Json,
    extract::{Path, State},
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::instrument;

use seagrape_core::ProductId;

use crate::db::products::ProductRepository;
use crate::error::ApiError;
use crate::models::product::Product;
use crate::state::AppState;

/// Product on the wire.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
        }
    }
}

/// List the product catalog.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<ProductView>>, ApiError> {
    let products = ProductRepository::new(state.pool()).list().await?;

    Ok(Json(products.iter().map(ProductView::from).collect()))
}

/// Show a single product.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<ProductView>, ApiError> {
    let product = ProductRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("product not found".to_owned()))?;

    Ok(Json(ProductView::from(&product)))
}
