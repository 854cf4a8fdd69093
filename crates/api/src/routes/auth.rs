//! Auth route handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use seagrape_core::UserId;

use crate::error::ApiError;
use crate::models::user::User;
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Registration / login request body.
#[derive(Debug, Deserialize)]
pub struct CredentialsBody {
    pub username: String,
    pub password: String,
}

/// Public view of a user account.
#[derive(Debug, Serialize)]
pub struct UserView {
    pub id: UserId,
    pub username: String,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.as_str().to_owned(),
        }
    }
}

/// Response body carrying a freshly issued bearer token.
#[derive(Debug, Serialize)]
pub struct TokenView {
    pub token: String,
}

/// Create an account.
#[instrument(skip(state, body))]
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<CredentialsBody>,
) -> Result<Json<UserView>, ApiError> {
    let service = AuthService::new(state.pool());
    let user = service.register(&body.username, &body.password).await?;

    tracing::info!(user_id = %user.id, "account registered");

    Ok(Json(UserView::from(&user)))
}

/// Exchange credentials for a bearer token.
#[instrument(skip(state, body))]
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<CredentialsBody>,
) -> Result<Json<TokenView>, ApiError> {
    let service = AuthService::new(state.pool());
    let user = service.login(&body.username, &body.password).await?;

    let token = state.tokens().issue(user.id)?;

    Ok(Json(TokenView { token }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_view_serializes_expected_fields() {
        let view = UserView {
            id: UserId::new(3),
            username: "alice".to_owned(),
        };
        let json = serde_json::to_value(&view).expect("serialize");
        assert_eq!(json, serde_json::json!({"id": 3, "username": "alice"}));
    }
}
