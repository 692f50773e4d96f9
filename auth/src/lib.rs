//! Authentication infrastructure library
//!
//! Provides the two cryptographic building blocks of the credential service:
//! - Password hashing (Argon2id)
//! - Signed, time-limited token issuance (JWT, HS256)
//!
//! The service defines its own domain types and adapts these implementations,
//! so this crate stays free of storage and transport concerns.
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
//! ```
//!
//! ## Token Issuance
//! ```
//! use auth::TokenIssuer;
//! use chrono::Duration;
//!
//! let issuer =
//!     TokenIssuer::new(b"secret_key_at_least_32_bytes_long!", Duration::days(30)).unwrap();
//! let token = issuer.issue("Family", "email@server.com").unwrap();
//! assert!(!token.is_empty());
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenIssuer;
