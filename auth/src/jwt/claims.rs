use serde::Deserialize;
use serde::Serialize;

/// Claims carried by every token issued by this crate.
///
/// Access and refresh tokens share this structure; they differ only in the
/// lifetime used to compute `exp`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a subject expiring at `exp`.
    pub fn new(sub: impl ToString, exp: i64) -> Self {
        Self {
            sub: sub.to_string(),
            exp,
        }
    }

    /// Subject as string slice.
    pub fn subject(&self) -> &str {
        &self.sub
    }

    /// Check if token is expired.
    ///
    /// A token is still valid at the exact second of its expiration.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp > self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims() {
        let claims = Claims::new("user123", 1_700_000_000);
        assert_eq!(claims.subject(), "user123");
        assert_eq!(claims.exp, 1_700_000_000);
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims::new("user123", 1000);

        assert!(!claims.is_expired(999)); // Not expired
        assert!(!claims.is_expired(1000)); // Exactly at expiration
        assert!(claims.is_expired(1001)); // Expired
    }

    #[test]
    fn test_serialized_shape() {
        let claims = Claims::new("user123", 42);
        let json = serde_json::to_value(&claims).unwrap();

        assert_eq!(json, serde_json::json!({ "sub": "user123", "exp": 42 }));
    }
}
