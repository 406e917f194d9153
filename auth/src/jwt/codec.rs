use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// HMAC algorithms accepted on decode. Anything else in a token header is
/// rejected before the signature is checked.
const ACCEPTED_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// Signs and verifies tokens with a single shared secret.
///
/// Uses HS256 (HMAC with SHA-256) for signing. Keys are derived once at
/// construction, so a codec should be built at startup and shared.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    has_secret: bool,
}

impl TokenCodec {
    /// Create a new codec with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - An empty secret is accepted here but every `encode` call fails
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            has_secret: !secret.is_empty(),
        }
    }

    /// Sign a token for `subject` expiring at `expiry`.
    ///
    /// # Arguments
    /// * `subject` - Identity placed in the `sub` claim
    /// * `expiry` - Absolute Unix timestamp placed in the `exp` claim
    ///
    /// # Returns
    /// Compact JWT string
    ///
    /// # Errors
    /// * `SigningFailed` - Secret is empty or signing failed
    pub fn encode(&self, subject: &str, expiry: i64) -> Result<String, JwtError> {
        if !self.has_secret {
            return Err(JwtError::SigningFailed("signing secret is empty".to_string()));
        }

        let header = Header::new(self.algorithm);
        let claims = Claims::new(subject, expiry);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| JwtError::SigningFailed(e.to_string()))
    }

    /// Verify a token and return its claims.
    ///
    /// Expiry is NOT enforced here: an expired but otherwise valid token
    /// decodes successfully. Callers compare `exp` against their clock.
    ///
    /// # Errors
    /// * `InvalidSignature` - Signature mismatch, or header names a non-HMAC algorithm
    /// * `MalformedToken` - Token cannot be parsed or lacks `sub`/`exp`
    pub fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &Self::validation()).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                        JwtError::InvalidSignature
                    }
                    _ => JwtError::MalformedToken(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = ACCEPTED_ALGORITHMS.to_vec();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["sub", "exp"]);
        validation
    }
}
