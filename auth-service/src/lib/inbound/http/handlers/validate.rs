use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedSubject;

pub async fn validate(
    Extension(subject): Extension<AuthenticatedSubject>,
) -> ApiSuccess<ValidateResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        ValidateResponseData {
            message: format!("I'm logged in {}", subject.as_str()),
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidateResponseData {
    pub message: String,
}
