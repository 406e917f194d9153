use std::sync::Arc;

use auth::AccessGate;
use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;

use crate::inbound::http::cookies::token_from;
use crate::inbound::http::cookies::ACCESS_TOKEN_COOKIE;
use crate::inbound::http::handlers::ApiError;

/// Identity of the caller, placed in request extensions once the access
/// token has been admitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedSubject(pub String);

impl AuthenticatedSubject {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Middleware that admits requests carrying a valid `access_token` cookie.
///
/// Rejected requests never reach the wrapped handler.
pub async fn require_access_token(
    State(gate): State<Arc<AccessGate>>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = token_from(&jar, ACCESS_TOKEN_COOKIE);

    let claims = gate.admit(token.as_deref()).map_err(|e| {
        tracing::warn!(error = %e, uri = %req.uri(), "Access token rejected");
        ApiError::from(e)
    })?;

    req.extensions_mut()
        .insert(AuthenticatedSubject(claims.sub));

    Ok(next.run(req).await)
}
