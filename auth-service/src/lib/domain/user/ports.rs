use async_trait::async_trait;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::SignInCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserProfile;
use crate::user::errors::AuthError;
use crate::user::errors::CredentialError;
use crate::user::errors::StoreError;

pub use auth::TokenPair;

/// Port for registration, sign-in and token refresh.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Validated name, email and plaintext password
    ///
    /// # Returns
    /// Public projection of the created user
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `HashingFailed` - Password could not be hashed
    /// * `Store` - Store failure, passed through unchanged
    async fn register(&self, command: RegisterUserCommand) -> Result<UserProfile, AuthError>;

    /// Verify credentials and issue a token pair.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (indistinguishable)
    /// * `CredentialCheckFailed` - Hasher could not run
    /// * `Issuance` - Tokens could not be signed
    /// * `Store` - Store failure
    async fn sign_in(&self, command: SignInCommand) -> Result<TokenPair, AuthError>;

    /// Redeem a refresh token for a brand-new pair.
    ///
    /// The presented pair is not invalidated; it lives until natural expiry.
    ///
    /// # Errors
    /// * `Unauthorized` - Token is malformed or its signature is invalid
    /// * `ExpiredToken` - Token verified but has expired
    /// * `UserNotFound` - Subject no longer exists
    /// * `Issuance` - Tokens could not be signed
    /// * `Store` - Store failure
    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError>;

    /// Retrieve the public projection of a user.
    ///
    /// # Errors
    /// * `UserNotFound` - User does not exist
    /// * `Store` - Store failure
    async fn get_user(&self, id: &UserId) -> Result<UserProfile, AuthError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `UniqueViolation` - Email is already registered
    /// * `Database` - Storage operation failed
    async fn create(&self, user: User) -> Result<User, StoreError>;

    /// Retrieve user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, StoreError>;

    /// Retrieve user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, StoreError>;
}

/// One-way credential hashing.
#[async_trait]
pub trait CredentialHasher: Send + Sync + 'static {
    /// Hash a plaintext password into a storable digest.
    ///
    /// # Errors
    /// * `Rejected` - Primitive failed (e.g. input too long)
    /// * `Unavailable` - Hasher could not run
    async fn hash(&self, plaintext: &str) -> Result<String, CredentialError>;

    /// Compare a plaintext password against a stored digest.
    ///
    /// # Returns
    /// True on match, false on mismatch
    ///
    /// # Errors
    /// * `Rejected` - Digest is unreadable
    /// * `Unavailable` - Hasher could not run
    async fn compare(&self, digest: &str, plaintext: &str) -> Result<bool, CredentialError>;
}
