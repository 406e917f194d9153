use std::sync::Arc;

use async_trait::async_trait;
use auth::TokenIssuer;
use auth::TokenPair;
use chrono::Utc;

use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::SignInCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserProfile;
use crate::user::errors::AuthError;
use crate::user::errors::CredentialError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::CredentialHasher;
use crate::user::ports::UserRepository;

/// Domain service implementation for the sign-in protocol.
///
/// Holds no mutable state; every operation is a one-shot exchange with the
/// user store.
pub struct AuthService<UR, H>
where
    UR: UserRepository,
    H: CredentialHasher,
{
    repository: Arc<UR>,
    hasher: Arc<H>,
    issuer: Arc<TokenIssuer>,
}

impl<UR, H> AuthService<UR, H>
where
    UR: UserRepository,
    H: CredentialHasher,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `hasher` - Password hashing implementation
    /// * `issuer` - Token pair issuer (also used to verify refresh tokens)
    pub fn new(repository: Arc<UR>, hasher: Arc<H>, issuer: Arc<TokenIssuer>) -> Self {
        Self {
            repository,
            hasher,
            issuer,
        }
    }

    fn issue_for(&self, id: &UserId) -> Result<TokenPair, AuthError> {
        Ok(self.issuer.issue(&id.to_string())?)
    }
}

#[async_trait]
impl<UR, H> AuthServicePort for AuthService<UR, H>
where
    UR: UserRepository,
    H: CredentialHasher,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<UserProfile, AuthError> {
        if self.repository.find_by_email(&command.email).await?.is_some() {
            return Err(AuthError::EmailAlreadyExists(command.email.to_string()));
        }

        let password_hash = self
            .hasher
            .hash(&command.password)
            .await
            .map_err(|e| AuthError::HashingFailed(e.to_string()))?;

        let user = User::register(command.name, command.email, password_hash);
        let created = self.repository.create(user).await?;

        Ok(created.into())
    }

    async fn sign_in(&self, command: SignInCommand) -> Result<TokenPair, AuthError> {
        let user = self
            .repository
            .find_by_email(&command.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let matches = match self
            .hasher
            .compare(&user.password_hash, &command.password)
            .await
        {
            Ok(matches) => matches,
            // An unreadable digest is reported exactly like a wrong password.
            Err(CredentialError::Rejected(auth::PasswordError::VerificationFailed(_))) => false,
            Err(e) => return Err(AuthError::CredentialCheckFailed(e.to_string())),
        };

        if !matches {
            return Err(AuthError::InvalidCredentials);
        }

        self.issue_for(&user.id)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError> {
        let claims = self.issuer.codec().decode(refresh_token)?;

        if claims.is_expired(Utc::now().timestamp()) {
            return Err(AuthError::ExpiredToken);
        }

        // A subject that is not a UUID cannot name a stored user.
        let user = match UserId::from_string(claims.subject()) {
            Ok(id) => self.repository.find_by_id(&id).await?,
            Err(_) => None,
        }
        .ok_or_else(|| AuthError::UserNotFound(claims.sub.clone()))?;

        self.issue_for(&user.id)
    }

    async fn get_user(&self, id: &UserId) -> Result<UserProfile, AuthError> {
        self.repository
            .find_by_id(id)
            .await?
            .map(UserProfile::from)
            .ok_or(AuthError::UserNotFound(id.to_string()))
    }
}
