//! Authentication service errors.

use thiserror::Error;

use seagrape_core::UsernameError;

use crate::db::RepositoryError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The username failed structural validation.
    #[error(transparent)]
    InvalidUsername(#[from] UsernameError),

    /// The password doesn't meet requirements.
    #[error("{0}")]
    WeakPassword(String),

    /// The username is already registered.
    #[error("username already taken")]
    UserAlreadyExists,

    /// Unknown username or wrong password.
    ///
    /// One variant for both cases so login responses don't reveal which
    /// usernames exist.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Password hashing failed.
    #[error("password hashing failed")]
    PasswordHash,

    /// Database operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
