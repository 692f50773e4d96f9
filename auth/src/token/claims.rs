use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by an issued credential token.
///
/// The payload is exactly the authenticated identity plus its expiry; there
/// is no server-side token state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Partition the identity belongs to
    pub tenant: String,

    /// Email, unique within the tenant
    pub email: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for an authenticated identity.
    ///
    /// # Arguments
    /// * `tenant` - Tenant the identity belongs to
    /// * `email` - Email of the identity
    /// * `expires_at` - Instant after which the token is no longer valid
    pub fn new(tenant: impl Into<String>, email: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            tenant: tenant.into(),
            email: email.into(),
            exp: expires_at.timestamp(),
        }
    }
}
