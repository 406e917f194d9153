use std::sync::Arc;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::jwt::JwtError;
use crate::jwt::TokenCodec;

/// Lifetimes applied to the two token flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenLifetimes {
    pub access: Duration,
    pub refresh: Duration,
}

impl TokenLifetimes {
    /// Build lifetimes from access minutes and refresh days.
    ///
    /// Panics when either value overflows a `Duration`; use `try_new` for
    /// untrusted input.
    pub fn new(access_minutes: i64, refresh_days: i64) -> Self {
        Self {
            access: Duration::minutes(access_minutes),
            refresh: Duration::days(refresh_days),
        }
    }

    /// Build lifetimes, or `None` when either value overflows a `Duration`.
    pub fn try_new(access_minutes: i64, refresh_days: i64) -> Option<Self> {
        Some(Self {
            access: Duration::try_minutes(access_minutes)?,
            refresh: Duration::try_days(refresh_days)?,
        })
    }

    /// Access token lifetime in whole seconds.
    pub fn access_seconds(&self) -> i64 {
        self.access.num_seconds()
    }

    /// Refresh token lifetime in whole seconds.
    pub fn refresh_seconds(&self) -> i64 {
        self.refresh.num_seconds()
    }
}

/// An access token and a refresh token minted together for one subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Error raised when a token pair cannot be minted.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum IssuanceError {
    #[error("Token issuance failed: {0}")]
    Signing(#[from] JwtError),

    #[error("Token expiry is out of range")]
    ExpiryOutOfRange,
}

/// Mints token pairs for authenticated subjects.
pub struct TokenIssuer {
    codec: Arc<TokenCodec>,
    lifetimes: TokenLifetimes,
}

impl TokenIssuer {
    pub fn new(codec: Arc<TokenCodec>, lifetimes: TokenLifetimes) -> Self {
        Self { codec, lifetimes }
    }

    /// Issue a fresh pair for `subject`, timed from the current clock.
    ///
    /// # Errors
    /// * `Signing` - Either token could not be signed
    /// * `ExpiryOutOfRange` - A lifetime pushes the expiry past the calendar
    pub fn issue(&self, subject: &str) -> Result<TokenPair, IssuanceError> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue a pair for `subject` with both expiries computed from `now`.
    pub fn issue_at(&self, subject: &str, now: DateTime<Utc>) -> Result<TokenPair, IssuanceError> {
        let access_expiry = expiry_after(now, self.lifetimes.access)?;
        let refresh_expiry = expiry_after(now, self.lifetimes.refresh)?;

        Ok(TokenPair {
            access_token: self.codec.encode(subject, access_expiry)?,
            refresh_token: self.codec.encode(subject, refresh_expiry)?,
        })
    }

    /// Codec used to sign the pairs, for callers that verify them.
    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    pub fn lifetimes(&self) -> TokenLifetimes {
        self.lifetimes
    }
}

fn expiry_after(now: DateTime<Utc>, lifetime: Duration) -> Result<i64, IssuanceError> {
    now.checked_add_signed(lifetime)
        .map(|expiry| expiry.timestamp())
        .ok_or(IssuanceError::ExpiryOutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer_with_secret(secret: &[u8]) -> TokenIssuer {
        TokenIssuer::new(Arc::new(TokenCodec::new(secret)), TokenLifetimes::new(15, 7))
    }

    #[test]
    fn test_issue_binds_both_tokens_to_subject() {
        let issuer = issuer_with_secret(b"test_secret_key_at_least_32_bytes!");

        let pair = issuer.issue("user123").expect("Issuance failed");

        let access = issuer.codec().decode(&pair.access_token).unwrap();
        let refresh = issuer.codec().decode(&pair.refresh_token).unwrap();
        assert_eq!(access.sub, "user123");
        assert_eq!(refresh.sub, "user123");
        assert!(access.exp < refresh.exp);
    }

    #[test]
    fn test_issue_at_uses_single_snapshot() {
        let issuer = issuer_with_secret(b"test_secret_key_at_least_32_bytes!");
        let now = Utc::now();

        let pair = issuer.issue_at("user123", now).unwrap();

        let access = issuer.codec().decode(&pair.access_token).unwrap();
        let refresh = issuer.codec().decode(&pair.refresh_token).unwrap();
        assert_eq!(access.exp, now.timestamp() + 15 * 60);
        assert_eq!(refresh.exp, now.timestamp() + 7 * 24 * 60 * 60);
        assert!(access.exp > now.timestamp());
    }

    #[test]
    fn test_issue_with_empty_secret() {
        let issuer = issuer_with_secret(b"");

        let result = issuer.issue("user123");
        assert!(matches!(
            result,
            Err(IssuanceError::Signing(JwtError::SigningFailed(_)))
        ));
    }

    #[test]
    fn test_issue_with_expiry_past_calendar() {
        let lifetimes = TokenLifetimes::try_new(15, 100_000_000).unwrap();
        let issuer = TokenIssuer::new(
            Arc::new(TokenCodec::new(b"test_secret_key_at_least_32_bytes!")),
            lifetimes,
        );

        assert_eq!(
            issuer.issue("user123"),
            Err(IssuanceError::ExpiryOutOfRange)
        );
    }

    #[test]
    fn test_try_new_rejects_overflowing_lifetimes() {
        assert!(TokenLifetimes::try_new(i64::MAX, 7).is_none());
        assert!(TokenLifetimes::try_new(15, i64::MAX).is_none());
        assert_eq!(
            TokenLifetimes::try_new(15, 7),
            Some(TokenLifetimes::new(15, 7))
        );
    }

    #[test]
    fn test_lifetimes_in_seconds() {
        let lifetimes = TokenLifetimes::new(15, 7);
        assert_eq!(lifetimes.access_seconds(), 900);
        assert_eq!(lifetimes.refresh_seconds(), 604_800);
    }
}
