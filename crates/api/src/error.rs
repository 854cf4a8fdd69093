//! Unified error handling with Sentry integration.
//!
//! Provides a unified `ApiError` type that captures internal errors to
//! Sentry before responding to the client. All route handlers return
//! `Result<T, ApiError>`. Clients always receive a JSON body of the shape
//! `{"message": "..."}`; internal detail is logged server-side and never
//! echoed back.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::auth::AuthError;
use crate::services::cart::CartError;
use crate::services::token::TokenError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No credential was supplied with the request.
    #[error("access denied: no token provided")]
    AuthMissing,

    /// A credential was supplied but is malformed, forged, or expired.
    #[error("invalid token")]
    AuthInvalid,

    /// Registration or login failed.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// A cart operation failed.
    #[error("cart error: {0}")]
    Cart(#[from] CartError),

    /// Token issuing or verification failed.
    #[error("token error: {0}")]
    Token(#[from] TokenError),

    /// Database operation failed outside a service.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),

    /// Request payload failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),
}

/// JSON error body returned to clients.
#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

impl ApiError {
    /// Whether this error is an unexpected internal failure.
    ///
    /// Internal failures get logged and Sentry-captured, and the client
    /// sees only a generic message.
    const fn is_internal(&self) -> bool {
        match self {
            Self::Repository(RepositoryError::NotFound) => false,
            Self::Repository(_)
            | Self::Auth(AuthError::PasswordHash | AuthError::Repository(_))
            | Self::Cart(CartError::Repository(_))
            | Self::Token(TokenError::Encode(_)) => true,
            _ => false,
        }
    }

    /// HTTP status code for this error.
    fn status(&self) -> StatusCode {
        match self {
            Self::AuthMissing => StatusCode::UNAUTHORIZED,
            Self::AuthInvalid | Self::Validation(_) | Self::Token(TokenError::Invalid) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) | Self::Repository(RepositoryError::NotFound) => {
                StatusCode::NOT_FOUND
            }
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::UserAlreadyExists => StatusCode::CONFLICT,
                AuthError::InvalidUsername(_) | AuthError::WeakPassword(_) => {
                    StatusCode::BAD_REQUEST
                }
                AuthError::PasswordHash | AuthError::Repository(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Cart(err) => match err {
                CartError::ProductNotFound | CartError::CartNotFound | CartError::ItemNotFound => {
                    StatusCode::NOT_FOUND
                }
                CartError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Repository(_) | Self::Token(TokenError::Encode(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message shown to the client.
    ///
    /// Expected failures get precise messages; internal failures are
    /// flattened to a generic one.
    fn client_message(&self) -> String {
        match self {
            Self::AuthMissing => "access denied: no token provided".to_owned(),
            Self::AuthInvalid | Self::Token(TokenError::Invalid) => "invalid token".to_owned(),
            Self::Validation(msg) => msg.clone(),
            Self::NotFound(msg) => msg.clone(),
            Self::Repository(RepositoryError::NotFound) => "not found".to_owned(),
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => "invalid credentials".to_owned(),
                AuthError::UserAlreadyExists => "username already taken".to_owned(),
                AuthError::InvalidUsername(e) => e.to_string(),
                AuthError::WeakPassword(msg) => msg.clone(),
                AuthError::PasswordHash | AuthError::Repository(_) => {
                    "internal server error".to_owned()
                }
            },
            Self::Cart(err) => match err {
                CartError::ProductNotFound => "product not found".to_owned(),
                CartError::CartNotFound => "cart not found".to_owned(),
                CartError::ItemNotFound => "item not found in cart".to_owned(),
                CartError::Repository(_) => "internal server error".to_owned(),
            },
            Self::Repository(_) | Self::Token(TokenError::Encode(_)) => {
                "internal server error".to_owned()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.is_internal() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let body = ErrorBody {
            message: self.client_message(),
        };

        (self.status(), Json(body)).into_response()
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_gate_statuses_are_distinguishable() {
        // Missing and invalid credentials must produce different responses.
        assert_eq!(ApiError::AuthMissing.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::AuthInvalid.status(), StatusCode::BAD_REQUEST);
        assert_ne!(
            ApiError::AuthMissing.client_message(),
            ApiError::AuthInvalid.client_message()
        );
    }

    #[test]
    fn test_not_found_kinds_map_to_404() {
        for err in [
            ApiError::Cart(CartError::ProductNotFound),
            ApiError::Cart(CartError::CartNotFound),
            ApiError::Cart(CartError::ItemNotFound),
            ApiError::NotFound("product not found".to_owned()),
        ] {
            assert_eq!(err.status(), StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn test_not_found_messages_are_precise() {
        assert_eq!(
            ApiError::Cart(CartError::ItemNotFound).client_message(),
            "item not found in cart"
        );
        assert_eq!(
            ApiError::Cart(CartError::CartNotFound).client_message(),
            "cart not found"
        );
        assert_eq!(
            ApiError::Cart(CartError::ProductNotFound).client_message(),
            "product not found"
        );
    }

    #[test]
    fn test_validation_maps_to_400() {
        let err = ApiError::Validation("quantity must be at least 1".to_owned());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.client_message(), "quantity must be at least 1");
    }

    #[test]
    fn test_auth_service_errors() {
        assert_eq!(
            ApiError::Auth(AuthError::InvalidCredentials).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Auth(AuthError::UserAlreadyExists).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Auth(AuthError::WeakPassword("too short".to_owned())).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_internal_detail_is_not_echoed() {
        let err = ApiError::Repository(RepositoryError::DataCorruption(
            "invalid username in database: row 17".to_owned(),
        ));

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.client_message(), "internal server error");
        assert!(!err.client_message().contains("row 17"));
    }

    #[test]
    fn test_repository_not_found_is_not_internal() {
        let err = ApiError::Repository(RepositoryError::NotFound);
        assert!(!err.is_internal());
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_response_body_shape() {
        let body = ErrorBody {
            message: "cart not found".to_owned(),
        };
        let json = serde_json::to_value(&body).expect("serialize");
        assert_eq!(json, serde_json::json!({"message": "cart not found"}));
    }
}
