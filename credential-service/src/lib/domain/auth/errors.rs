use auth::PasswordError;
use thiserror::Error;

/// Error for Tenant validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TenantError {
    #[error("Tenant must not be empty")]
    Empty,
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for authentication operations
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid tenant: {0}")]
    InvalidTenant(#[from] TenantError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    // Domain-level errors
    #[error("Email already in use: {0}")]
    EmailAlreadyInUse(String),

    /// Covers both an unknown identity and a wrong password; callers must
    /// not be able to tell the two apart.
    #[error("Invalid credentials")]
    InvalidCredentials,

    // Infrastructure errors
    #[error("Password error: {0}")]
    Hashing(#[from] PasswordError),

    #[error("Store error: {0}")]
    Store(String),
}
