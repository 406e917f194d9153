use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Longest plaintext accepted for hashing, in bytes.
pub const MAX_PASSWORD_BYTES: usize = 1024;

/// Salted one-way password hashing (Argon2id, PHC string output).
///
/// Verification goes through `password_hash`, which compares digests in
/// constant time.
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Create a new password hasher with Argon2id default parameters.
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// # Arguments
    /// * `plaintext` - Password to hash
    ///
    /// # Returns
    /// PHC string format digest (algorithm, parameters, salt and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Input longer than `MAX_PASSWORD_BYTES` or the primitive failed
    pub fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        if plaintext.len() > MAX_PASSWORD_BYTES {
            return Err(PasswordError::HashingFailed(format!(
                "password longer than {} bytes",
                MAX_PASSWORD_BYTES
            )));
        }

        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Compare a plaintext password against a stored digest.
    ///
    /// # Arguments
    /// * `digest` - Stored PHC string
    /// * `plaintext` - Candidate password
    ///
    /// # Returns
    /// True if the password matches, false on mismatch
    ///
    /// # Errors
    /// * `VerificationFailed` - Digest is not a valid PHC string
    pub fn compare(&self, digest: &str, plaintext: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(digest).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })?;

        Ok(self
            .argon2
            .verify_password(plaintext.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_compare() {
        let hasher = PasswordHasher::new();
        let password = "my_secure_password";

        let digest = hasher.hash(password).expect("Failed to hash password");
        assert!(digest.starts_with("$argon2id$"));

        assert!(hasher
            .compare(&digest, password)
            .expect("Failed to compare password"));
        assert!(!hasher
            .compare(&digest, "wrong_password")
            .expect("Failed to compare password"));
    }

    #[test]
    fn test_salted_digests_differ() {
        let hasher = PasswordHasher::new();

        let first = hasher.hash("same_password").unwrap();
        let second = hasher.hash("same_password").unwrap();

        assert_ne!(first, second);
        assert!(hasher.compare(&first, "same_password").unwrap());
        assert!(hasher.compare(&second, "same_password").unwrap());
    }

    #[test]
    fn test_hash_rejects_oversized_input() {
        let hasher = PasswordHasher::new();
        let password = "x".repeat(MAX_PASSWORD_BYTES + 1);

        let result = hasher.hash(&password);
        assert!(matches!(result, Err(PasswordError::HashingFailed(_))));
    }

    #[test]
    fn test_compare_invalid_digest() {
        let hasher = PasswordHasher::new();
        let result = hasher.compare("invalid_hash", "password");
        assert!(matches!(result, Err(PasswordError::VerificationFailed(_))));
    }
}
