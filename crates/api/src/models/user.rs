//! User domain types.

use chrono::{DateTime, Utc};

use seagrape_core::{UserId, Username};

/// A registered account (domain type).
///
/// The password hash is deliberately not part of this type; it only ever
/// surfaces in `UserRepository::get_password_hash`.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Unique login name.
    pub username: Username,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}
