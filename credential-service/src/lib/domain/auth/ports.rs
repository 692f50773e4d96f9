use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::SignInCommand;
use crate::domain::auth::models::SignUpCommand;
use crate::domain::auth::models::Tenant;
use crate::domain::auth::models::User;

/// Port for the authentication use case.
#[async_trait]
pub trait AuthUseCase: Send + Sync + 'static {
    /// Register a new identity.
    ///
    /// # Arguments
    /// * `command` - Validated command containing tenant, email, name, and password
    ///
    /// # Returns
    /// Created user record, password hash included; sanitizing the hash out
    /// of responses is the inbound layer's concern
    ///
    /// # Errors
    /// * `EmailAlreadyInUse` - Identity key is already registered
    /// * `Hashing` - Password hashing failed (fatal, not retried)
    /// * `Store` - Backend operation failed
    async fn sign_up(&self, command: SignUpCommand) -> Result<User, AuthError>;

    /// Verify presented credentials.
    ///
    /// # Arguments
    /// * `command` - Validated command containing tenant, email, and password
    ///
    /// # Returns
    /// The matched user record
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown identity or wrong password (unified)
    /// * `Store` - Backend operation failed
    async fn sign_in(&self, command: SignInCommand) -> Result<User, AuthError>;
}

/// Persistence capability the use case depends on.
///
/// `create` must be atomic with respect to the `(tenant, email)` uniqueness
/// key: when two callers race to create the same identity, at most one
/// succeeds and the loser observes `EmailAlreadyInUse`. The backend is the
/// final authority on uniqueness.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Retrieve a user by identity key.
    ///
    /// # Returns
    /// Optional user record (None if not found)
    ///
    /// # Errors
    /// * `Store` - Backend operation failed
    async fn find(&self, tenant: &Tenant, email: &EmailAddress)
        -> Result<Option<User>, AuthError>;

    /// Persist a new user record.
    ///
    /// # Returns
    /// The created user record
    ///
    /// # Errors
    /// * `EmailAlreadyInUse` - Identity key is already registered
    /// * `Store` - Backend operation failed
    async fn create(&self, user: User) -> Result<User, AuthError>;
}
