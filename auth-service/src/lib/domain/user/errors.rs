use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for DisplayName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DisplayNameError {
    #[error("Name must not be empty")]
    Empty,

    #[error("Name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error raised by credential hasher implementations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialError {
    /// The hashing primitive refused the input or the stored digest.
    #[error(transparent)]
    Rejected(#[from] auth::PasswordError),

    /// The hasher could not run at all.
    #[error("Credential hasher unavailable: {0}")]
    Unavailable(String),
}

/// Error raised by user store implementations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Unique constraint violated on {0}")]
    UniqueViolation(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Top-level error for registration, sign-in and refresh
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Credential check failed: {0}")]
    CredentialCheckFailed(String),

    #[error(transparent)]
    Issuance(#[from] auth::IssuanceError),

    #[error("Unauthorized: {0}")]
    Unauthorized(#[from] auth::JwtError),

    #[error("Token is expired")]
    ExpiredToken,

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
