use std::fmt;
use std::str::FromStr;

use crate::domain::auth::errors::EmailError;
use crate::domain::auth::errors::TenantError;

/// Registered identity.
///
/// Created once by sign-up and immutable thereafter; `(tenant, email)` is
/// the unique identity key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub tenant: Tenant,
    pub email: EmailAddress,
    pub name: String,
    /// Opaque credential-hasher output, never the plaintext password
    pub password_hash: String,
}

/// Tenant value type
///
/// Partition key grouping users (e.g. an organization or a family).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tenant(String);

impl Tenant {
    /// Create a new tenant identifier.
    ///
    /// # Arguments
    /// * `tenant` - Raw tenant string
    ///
    /// # Returns
    /// Validated Tenant value object
    ///
    /// # Errors
    /// * `Empty` - Tenant is empty or whitespace only
    pub fn new(tenant: String) -> Result<Self, TenantError> {
        if tenant.trim().is_empty() {
            Err(TenantError::Empty)
        } else {
            Ok(Self(tenant))
        }
    }

    /// Get tenant as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tenant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Arguments
    /// * `email` - Raw email string
    ///
    /// # Returns
    /// Validated EmailAddress value object
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new identity with domain types
#[derive(Debug)]
pub struct SignUpCommand {
    pub tenant: Tenant,
    pub email: EmailAddress,
    pub name: String,
    pub password: String,
}

impl SignUpCommand {
    /// Construct a new sign-up command.
    ///
    /// # Arguments
    /// * `tenant` - Validated tenant
    /// * `email` - Validated email address
    /// * `name` - Display name
    /// * `password` - Plain text password (will be hashed by the service)
    pub fn new(tenant: Tenant, email: EmailAddress, name: String, password: String) -> Self {
        Self {
            tenant,
            email,
            name,
            password,
        }
    }
}

/// Command to verify presented credentials
#[derive(Debug)]
pub struct SignInCommand {
    pub tenant: Tenant,
    pub email: EmailAddress,
    pub password: String,
}

impl SignInCommand {
    pub fn new(tenant: Tenant, email: EmailAddress, password: String) -> Self {
        Self {
            tenant,
            email,
            password,
        }
    }
}
