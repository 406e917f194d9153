use auth::AccessError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::user::models::UserProfile;
use crate::user::errors::AuthError;
use crate::user::errors::StoreError;

pub mod me;
pub mod refresh;
pub mod sign_in;
pub mod sign_up;
pub mod validate;

/// Stable machine-readable error codes returned in error bodies.
pub mod codes {
    pub const INCORRECT_BODY: &str = "INCORRECT_BODY";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const EMAIL_ALREADY_EXISTS: &str = "EMAIL_ALREADY_EXISTS";
    pub const INVALID_EMAIL_OR_PASSWORD: &str = "INVALID_EMAIL_OR_PASSWORD";
    pub const MISSING_TOKEN: &str = "MISSING_TOKEN";
    pub const EXPIRED_TOKEN: &str = "EXPIRED_TOKEN";
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const USER_NOT_FOUND: &str = "USER_NOT_FOUND";
    pub const ERROR_ENCRYPTING_PASSWORD: &str = "ERROR_ENCRYPTING_PASSWORD";
    pub const ERROR_WHILE_SIGNATURE: &str = "ERROR_WHILE_SIGNATURE";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Boundary error: every variant carries a stable code and a human message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(&'static str, String),
    UnprocessableEntity(&'static str, String),
    BadRequest(&'static str, String),
    NotFound(&'static str, String),
    Conflict(&'static str, String),
    Unauthorized(&'static str, String),
    Forbidden(&'static str, String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InternalServerError(..) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::UnprocessableEntity(..) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadRequest(..) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(..) => StatusCode::NOT_FOUND,
            ApiError::Conflict(..) => StatusCode::CONFLICT,
            ApiError::Unauthorized(..) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(..) => StatusCode::FORBIDDEN,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InternalServerError(code, _)
            | ApiError::UnprocessableEntity(code, _)
            | ApiError::BadRequest(code, _)
            | ApiError::NotFound(code, _)
            | ApiError::Conflict(code, _)
            | ApiError::Unauthorized(code, _)
            | ApiError::Forbidden(code, _) => *code,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();
        let message = match self {
            ApiError::InternalServerError(_, msg)
            | ApiError::UnprocessableEntity(_, msg)
            | ApiError::BadRequest(_, msg)
            | ApiError::NotFound(_, msg)
            | ApiError::Conflict(_, msg)
            | ApiError::Unauthorized(_, msg)
            | ApiError::Forbidden(_, msg) => msg,
        };

        if status.is_server_error() {
            tracing::error!(code, error = %message, "Request failed");
        }

        (
            status,
            Json(ApiResponseBody::new_error(status, code, message)),
        )
            .into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(codes::INCORRECT_BODY, rejection.body_text())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        let message = err.to_string();
        match err {
            AuthError::EmailAlreadyExists(_) | AuthError::Store(StoreError::UniqueViolation(_)) => {
                ApiError::Conflict(codes::EMAIL_ALREADY_EXISTS, message)
            }
            AuthError::InvalidCredentials => {
                ApiError::Forbidden(codes::INVALID_EMAIL_OR_PASSWORD, message)
            }
            AuthError::Unauthorized(_) => ApiError::Unauthorized(codes::UNAUTHORIZED, message),
            AuthError::ExpiredToken => ApiError::Unauthorized(codes::EXPIRED_TOKEN, message),
            AuthError::UserNotFound(_) => ApiError::NotFound(codes::USER_NOT_FOUND, message),
            AuthError::HashingFailed(_) => {
                ApiError::InternalServerError(codes::ERROR_ENCRYPTING_PASSWORD, message)
            }
            AuthError::CredentialCheckFailed(_) => {
                ApiError::InternalServerError(codes::INTERNAL_ERROR, message)
            }
            AuthError::Issuance(_) => {
                ApiError::InternalServerError(codes::ERROR_WHILE_SIGNATURE, message)
            }
            AuthError::Store(StoreError::Database(_)) => {
                ApiError::InternalServerError(codes::INTERNAL_ERROR, message)
            }
        }
    }
}

impl From<AccessError> for ApiError {
    fn from(err: AccessError) -> Self {
        let message = err.to_string();
        match err {
            AccessError::MissingToken => ApiError::Unauthorized(codes::MISSING_TOKEN, message),
            AccessError::Unauthorized(_) => ApiError::Unauthorized(codes::UNAUTHORIZED, message),
            AccessError::ExpiredToken => ApiError::Unauthorized(codes::EXPIRED_TOKEN, message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, code: &str, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData {
                code: code.to_string(),
                message,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub code: String,
    pub message: String,
}

/// Public user representation shared by the sign-up and profile routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfileData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&UserProfile> for UserProfileData {
    fn from(profile: &UserProfile) -> Self {
        Self {
            id: profile.id.to_string(),
            name: profile.name.as_str().to_string(),
            email: profile.email.as_str().to_string(),
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}
