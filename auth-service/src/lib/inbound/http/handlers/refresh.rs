use auth::AccessError;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::cookie::CookieJar;

use super::ApiError;
use crate::inbound::http::cookies::token_from;
use crate::inbound::http::cookies::with_token_cookies;
use crate::inbound::http::cookies::REFRESH_TOKEN_COOKIE;
use crate::inbound::http::router::AppState;

/// Redeem the `refresh_token` cookie for a brand-new pair.
pub async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, StatusCode), ApiError> {
    let refresh_token = token_from(&jar, REFRESH_TOKEN_COOKIE).ok_or(AccessError::MissingToken)?;

    let pair = state.auth_service.refresh(&refresh_token).await.map_err(|e| {
        tracing::warn!(error = %e, "Refresh token rejected");
        ApiError::from(e)
    })?;

    Ok((
        with_token_cookies(jar, &pair, state.lifetimes),
        StatusCode::NO_CONTENT,
    ))
}
