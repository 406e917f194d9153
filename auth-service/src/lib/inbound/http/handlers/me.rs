use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::codes;
use super::ApiError;
use super::ApiSuccess;
use super::UserProfileData;
use crate::domain::user::models::UserId;
use crate::inbound::http::middleware::AuthenticatedSubject;
use crate::inbound::http::router::AppState;

/// Profile of the user the access token was issued to.
pub async fn me(
    State(state): State<AppState>,
    Extension(subject): Extension<AuthenticatedSubject>,
) -> Result<ApiSuccess<UserProfileData>, ApiError> {
    let user_id = UserId::from_string(subject.as_str())
        .map_err(|e| ApiError::NotFound(codes::USER_NOT_FOUND, e.to_string()))?;

    state
        .auth_service
        .get_user(&user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref profile| ApiSuccess::new(StatusCode::OK, profile.into()))
}
