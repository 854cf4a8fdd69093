//! Product catalog seeding.
//!
//! The cart only accepts products that exist in the catalog, so a fresh
//! database needs at least a few rows before the API is usable.

use rust_decimal::Decimal;

use seagrape_api::db::{self, products::ProductRepository};

use super::{CommandError, database_url};

/// Sample catalog: (name, description, price in cents).
const SAMPLE_PRODUCTS: &[(&str, Option<&str>, i64)] = &[
    (
        "Sea Grapes, 200g",
        Some("Fresh umibudo sea grapes, chilled"),
        1250,
    ),
    ("Nori Sheets, 50pk", Some("Roasted sushi-grade nori"), 899),
    ("Wakame, dried, 100g", None, 650),
    (
        "Kombu Dashi Kit",
        Some("Kombu and bonito flakes for stock"),
        1825,
    ),
    ("Furikake, classic", Some("Sesame and seaweed rice topping"), 499),
];

/// Insert the sample catalog if the database has no products yet.
///
/// # Errors
///
/// Returns `CommandError` if the database is unreachable or an insert
/// fails.
pub async fn run() -> Result<(), CommandError> {
    let database_url = database_url()?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;

    let products = ProductRepository::new(&pool);

    if !products.list().await?.is_empty() {
        tracing::info!("Catalog already seeded, nothing to do");
        return Ok(());
    }

    for (name, description, cents) in SAMPLE_PRODUCTS {
        let product = products
            .insert(name, *description, Decimal::new(*cents, 2))
            .await?;
        tracing::info!(product_id = %product.id, name, "seeded product");
    }

    tracing::info!("Seeded {} products", SAMPLE_PRODUCTS.len());
    Ok(())
}
