//! Token-verification gate.
//!
//! Provides the extractor that every protected route goes through. The gate
//! distinguishes two failure kinds with distinguishable responses:
//!
//! - no credential supplied at all → 401
//! - a credential that is malformed, forged, or expired → 400
//!
//! Both are terminal here; business logic never sees an unauthenticated
//! request.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{HeaderValue, header::AUTHORIZATION, request::Parts},
};

use seagrape_core::UserId;

use crate::error::ApiError;
use crate::state::AppState;

/// Extractor that requires a valid bearer token.
///
/// Yields the user identity the token was signed for. Verification has no
/// side effects beyond that.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireUser(user_id): RequireUser,
/// ) -> impl IntoResponse {
///     format!("Hello, user {user_id}!")
/// }
/// ```
#[derive(Debug)]
pub struct RequireUser(pub UserId);

impl<S> FromRequestParts<S> for RequireUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts.headers.get(AUTHORIZATION))?;

        let state = AppState::from_ref(state);
        let claims = state
            .tokens()
            .verify(token)
            .map_err(|_| ApiError::AuthInvalid)?;

        Ok(Self(claims.user_id()))
    }
}

/// Extract the token substring from an `Authorization` header value.
///
/// Expects `Bearer <token>` (scheme match is case-insensitive). A missing
/// header, missing token part, or non-bearer scheme all count as "no
/// credential supplied".
fn bearer_token(header: Option<&HeaderValue>) -> Result<&str, ApiError> {
    let value = header.ok_or(ApiError::AuthMissing)?;
    let value = value.to_str().map_err(|_| ApiError::AuthInvalid)?;

    let mut parts = value.split_whitespace();
    let (Some(scheme), Some(token)) = (parts.next(), parts.next()) else {
        return Err(ApiError::AuthMissing);
    };

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(ApiError::AuthMissing);
    }

    Ok(token)
}
