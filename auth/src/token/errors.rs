use thiserror::Error;

/// Error type for token issuance.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Signing secret is missing or empty")]
    MissingSecret,

    #[error("Failed to sign token: {0}")]
    SigningFailed(String),
}
