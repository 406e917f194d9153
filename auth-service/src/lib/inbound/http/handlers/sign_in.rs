use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use thiserror::Error;

use super::codes;
use super::ApiError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::SignInCommand;
use crate::inbound::http::cookies::with_token_cookies;
use crate::inbound::http::router::AppState;
use crate::user::errors::EmailError;

/// Verify credentials; on success the token pair travels back as cookies.
pub async fn sign_in(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<SignInRequest>, JsonRejection>,
) -> Result<(CookieJar, StatusCode), ApiError> {
    let Json(body) = payload?;

    let pair = state.auth_service.sign_in(body.try_into_command()?).await?;

    Ok((
        with_token_cookies(jar, &pair, state.lifetimes),
        StatusCode::NO_CONTENT,
    ))
}

/// HTTP request body for signing in (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignInRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
pub enum ParseSignInRequestError {
    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Password must not be empty")]
    EmptyPassword,
}

impl SignInRequest {
    fn try_into_command(self) -> Result<SignInCommand, ParseSignInRequestError> {
        let email = EmailAddress::new(self.email)?;
        if self.password.is_empty() {
            return Err(ParseSignInRequestError::EmptyPassword);
        }
        Ok(SignInCommand::new(email, self.password))
    }
}

impl From<ParseSignInRequestError> for ApiError {
    fn from(err: ParseSignInRequestError) -> Self {
        ApiError::UnprocessableEntity(codes::VALIDATION_ERROR, err.to_string())
    }
}
