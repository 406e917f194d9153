use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::TokenCodec;

/// Reasons a request is refused at the access gate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccessError {
    #[error("Missing access token")]
    MissingToken,

    #[error("Unauthorized: {0}")]
    Unauthorized(#[from] JwtError),

    #[error("Token is expired")]
    ExpiredToken,
}

/// Per-request admission check for access tokens.
///
/// Stateless: holds only the codec, so one instance serves every request.
pub struct AccessGate {
    codec: Arc<TokenCodec>,
}

impl AccessGate {
    pub fn new(codec: Arc<TokenCodec>) -> Self {
        Self { codec }
    }

    /// Admit or refuse a request carrying `token`, using the current clock.
    ///
    /// # Returns
    /// Verified claims; `sub` is the authenticated identity
    ///
    /// # Errors
    /// * `MissingToken` - No token was presented
    /// * `Unauthorized` - Token failed to decode or verify
    /// * `ExpiredToken` - Token verified but its expiry has passed
    pub fn admit(&self, token: Option<&str>) -> Result<Claims, AccessError> {
        self.admit_at(token, Utc::now().timestamp())
    }

    /// Same as `admit`, against an explicit Unix timestamp.
    pub fn admit_at(&self, token: Option<&str>, now: i64) -> Result<Claims, AccessError> {
        let token = token.ok_or(AccessError::MissingToken)?;
        let claims = self.codec.decode(token)?;

        if claims.is_expired(now) {
            return Err(AccessError::ExpiredToken);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn gate() -> (AccessGate, Arc<TokenCodec>) {
        let codec = Arc::new(TokenCodec::new(SECRET));
        (AccessGate::new(Arc::clone(&codec)), codec)
    }

    #[test]
    fn test_admit_valid_token() {
        let (gate, codec) = gate();
        let token = codec.encode("user123", 2_000).unwrap();

        let claims = gate.admit_at(Some(&token), 1_000).unwrap();
        assert_eq!(claims.subject(), "user123");
    }

    #[test]
    fn test_admit_missing_token() {
        let (gate, _) = gate();
        assert_eq!(gate.admit_at(None, 1_000), Err(AccessError::MissingToken));
    }

    #[test]
    fn test_admit_expired_token() {
        let (gate, codec) = gate();
        let token = codec.encode("user123", 999).unwrap();

        assert_eq!(
            gate.admit_at(Some(&token), 1_000),
            Err(AccessError::ExpiredToken)
        );
    }

    #[test]
    fn test_admit_at_expiry_boundary() {
        let (gate, codec) = gate();
        let token = codec.encode("user123", 1_000).unwrap();

        assert!(gate.admit_at(Some(&token), 1_000).is_ok());
    }

    #[test]
    fn test_admit_garbage_token() {
        let (gate, _) = gate();

        let result = gate.admit_at(Some("garbage"), 1_000);
        assert!(matches!(
            result,
            Err(AccessError::Unauthorized(JwtError::MalformedToken(_)))
        ));
    }

    #[test]
    fn test_admit_foreign_signature() {
        let (gate, _) = gate();
        let foreign = TokenCodec::new(b"another_secret_key_at_least_32_bytes")
            .encode("user123", 2_000)
            .unwrap();

        assert_eq!(
            gate.admit_at(Some(&foreign), 1_000),
            Err(AccessError::Unauthorized(JwtError::InvalidSignature))
        );
    }
}
