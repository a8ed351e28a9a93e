//! Authentication utilities library
//!
//! Provides the authentication core for the booking service:
//! - Password hashing (Argon2id)
//! - Signed access-token issuance and verification
//! - Authentication coordination
//!
//! The crate is deliberately free of I/O and HTTP types: every operation is a
//! pure function of its inputs plus the process-wide secret key, so callers
//! can share one instance across concurrent requests without locking.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("not_my_password", &hash));
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::TokenCodec;
//! use chrono::{Duration, Utc};
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let token = codec.issue(42, Utc::now(), Duration::minutes(30)).unwrap();
//! assert_eq!(codec.verify(&token, Utc::now()).unwrap(), 42);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", 30);
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let result = auth.authenticate("password123", &hash, 1).unwrap();
//!
//! // Later requests: verify token, recover the user id
//! let user_id = auth.verify_token(&result.access_token).unwrap();
//! assert_eq!(user_id, 1);
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenCodec;
pub use token::TokenError;
