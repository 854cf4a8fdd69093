//! User account management.

use seagrape_api::db;
use seagrape_api::services::auth::AuthService;

use super::{CommandError, database_url};

/// Create a user account.
///
/// Goes through the same registration path as the HTTP API, so username
/// and password rules apply identically.
///
/// # Errors
///
/// Returns `CommandError` if the database is unreachable or registration
/// fails (invalid username, weak password, duplicate).
pub async fn create(username: &str, password: &str) -> Result<(), CommandError> {
    let database_url = database_url()?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;

    let user = AuthService::new(&pool).register(username, password).await?;

    tracing::info!(user_id = %user.id, username = %user.username, "user created");
    Ok(())
}
