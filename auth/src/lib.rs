//! Token and credential primitives
//!
//! Provides the stateless building blocks of the sign-in protocol:
//! - Password hashing (Argon2id)
//! - Signed token encoding and verification (HS256)
//! - Paired access/refresh token issuance
//! - Per-request access gating
//!
//! Nothing here performs I/O or logs; every failure is returned as a typed error.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("my_password").unwrap();
//! assert!(hasher.compare(&digest, "my_password").unwrap());
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenCodec;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let token = codec.encode("user123", 4_102_444_800).unwrap();
//! let claims = codec.decode(&token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! ```
//!
//! ## Issuing and gating
//! ```
//! use std::sync::Arc;
//!
//! use auth::{AccessGate, TokenCodec, TokenIssuer, TokenLifetimes};
//!
//! let codec = Arc::new(TokenCodec::new(b"secret_key_at_least_32_bytes_long!"));
//! let issuer = TokenIssuer::new(Arc::clone(&codec), TokenLifetimes::new(15, 7));
//! let gate = AccessGate::new(codec);
//!
//! let pair = issuer.issue("user123").unwrap();
//! let claims = gate.admit(Some(&pair.access_token)).unwrap();
//! assert_eq!(claims.sub, "user123");
//! ```

pub mod gate;
pub mod issuer;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use gate::AccessError;
pub use gate::AccessGate;
pub use issuer::IssuanceError;
pub use issuer::TokenIssuer;
pub use issuer::TokenLifetimes;
pub use issuer::TokenPair;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::TokenCodec;
pub use password::PasswordError;
pub use password::PasswordHasher;
