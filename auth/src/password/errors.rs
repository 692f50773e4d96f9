use thiserror::Error;

/// Error type for password operations.
///
/// Verification is infallible by contract (a mismatch or malformed hash is a
/// plain `false`), so only hashing carries an error path.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
