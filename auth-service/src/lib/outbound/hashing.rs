use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::user::ports::CredentialHasher;
use crate::user::errors::CredentialError;

/// Argon2id hasher from the `auth` crate, run off the async executor.
#[derive(Default)]
pub struct Argon2CredentialHasher {
    hasher: Arc<auth::PasswordHasher>,
}

impl Argon2CredentialHasher {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialHasher for Argon2CredentialHasher {
    async fn hash(&self, plaintext: &str) -> Result<String, CredentialError> {
        let hasher = Arc::clone(&self.hasher);
        let plaintext = plaintext.to_string();

        tokio::task::spawn_blocking(move || hasher.hash(&plaintext))
            .await
            .map_err(|e| CredentialError::Unavailable(format!("Task join error: {}", e)))?
            .map_err(CredentialError::from)
    }

    async fn compare(&self, digest: &str, plaintext: &str) -> Result<bool, CredentialError> {
        let hasher = Arc::clone(&self.hasher);
        let digest = digest.to_string();
        let plaintext = plaintext.to_string();

        tokio::task::spawn_blocking(move || hasher.compare(&digest, &plaintext))
            .await
            .map_err(|e| CredentialError::Unavailable(format!("Task join error: {}", e)))?
            .map_err(CredentialError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_and_compare() {
        let hasher = Argon2CredentialHasher::new();

        let digest = hasher.hash("async_password").await.unwrap();

        assert!(hasher.compare(&digest, "async_password").await.unwrap());
        assert!(!hasher.compare(&digest, "wrong").await.unwrap());
    }

    #[tokio::test]
    async fn test_oversized_password_fails() {
        let hasher = Argon2CredentialHasher::new();
        let password = "x".repeat(auth::password::MAX_PASSWORD_BYTES + 1);

        let result = hasher.hash(&password).await;
        assert!(matches!(
            result,
            Err(CredentialError::Rejected(auth::PasswordError::HashingFailed(_)))
        ));
    }

    #[tokio::test]
    async fn test_unreadable_digest_is_rejected() {
        let hasher = Argon2CredentialHasher::new();

        let result = hasher.compare("not-a-phc-string", "password").await;
        assert!(matches!(
            result,
            Err(CredentialError::Rejected(
                auth::PasswordError::VerificationFailed(_)
            ))
        ));
    }
}
