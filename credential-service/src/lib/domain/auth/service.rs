use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::SignInCommand;
use crate::domain::auth::models::SignUpCommand;
use crate::domain::auth::models::User;
use crate::domain::auth::ports::AuthUseCase;
use crate::domain::auth::ports::UserStore;

/// Domain service implementation for the authentication use case.
///
/// Stateless beyond the injected store handle; both operations are
/// single-pass with no retries.
pub struct AuthService<S>
where
    S: UserStore,
{
    store: Arc<S>,
    password_hasher: auth::PasswordHasher,
}

impl<S> AuthService<S>
where
    S: UserStore,
{
    /// Create a new auth service with an injected store.
    ///
    /// # Arguments
    /// * `store` - User persistence implementation
    ///
    /// # Returns
    /// Configured auth service instance
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<S> AuthUseCase for AuthService<S>
where
    S: UserStore,
{
    async fn sign_up(&self, command: SignUpCommand) -> Result<User, AuthError> {
        // The existence check is an optimization only; the store's conflict
        // signal on create remains the uniqueness authority.
        if self
            .store
            .find(&command.tenant, &command.email)
            .await?
            .is_some()
        {
            return Err(AuthError::EmailAlreadyInUse(
                command.email.as_str().to_string(),
            ));
        }

        // Hashing happens strictly before persistence; no record is ever
        // stored without its hash.
        let password_hash = self.password_hasher.hash(&command.password)?;

        let user = User {
            tenant: command.tenant,
            email: command.email,
            name: command.name,
            password_hash,
        };

        self.store.create(user).await
    }

    async fn sign_in(&self, command: SignInCommand) -> Result<User, AuthError> {
        // An unknown identity and a wrong password surface identically
        let user = self
            .store
            .find(&command.tenant, &command.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self
            .password_hasher
            .verify(&command.password, &user.password_hash)
        {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::auth::models::EmailAddress;
    use crate::domain::auth::models::Tenant;

    const TENANT: &str = "Family";
    const EMAIL: &str = "email@server.com";
    const NAME: &str = "User Full Name";
    const PASSWORD: &str = "Pas2sw0rd";

    mock! {
        pub TestUserStore {}

        #[async_trait]
        impl UserStore for TestUserStore {
            async fn find(&self, tenant: &Tenant, email: &EmailAddress) -> Result<Option<User>, AuthError>;
            async fn create(&self, user: User) -> Result<User, AuthError>;
        }
    }

    fn sign_up_command() -> SignUpCommand {
        SignUpCommand::new(
            Tenant::new(TENANT.to_string()).unwrap(),
            EmailAddress::new(EMAIL.to_string()).unwrap(),
            NAME.to_string(),
            PASSWORD.to_string(),
        )
    }

    fn sign_in_command(password: &str) -> SignInCommand {
        SignInCommand::new(
            Tenant::new(TENANT.to_string()).unwrap(),
            EmailAddress::new(EMAIL.to_string()).unwrap(),
            password.to_string(),
        )
    }

    fn stored_user() -> User {
        User {
            tenant: Tenant::new(TENANT.to_string()).unwrap(),
            email: EmailAddress::new(EMAIL.to_string()).unwrap(),
            name: NAME.to_string(),
            password_hash: auth::PasswordHasher::new()
                .hash(PASSWORD)
                .expect("Failed to hash password"),
        }
    }

    #[tokio::test]
    async fn test_sign_up_success() {
        let mut store = MockTestUserStore::new();

        store.expect_find().times(1).returning(|_, _| Ok(None));
        store
            .expect_create()
            .withf(|user| {
                user.tenant.as_str() == TENANT
                    && user.email.as_str() == EMAIL
                    && user.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|user| Ok(user));

        let service = AuthService::new(Arc::new(store));

        let user = service
            .sign_up(sign_up_command())
            .await
            .expect("Sign up failed");

        assert_eq!(user.name, NAME);
        // Hashed before persistence, never the plaintext
        assert!(!user.password_hash.is_empty());
        assert_ne!(user.password_hash, PASSWORD);
    }

    #[tokio::test]
    async fn test_sign_up_existing_identity_is_rejected() {
        let mut store = MockTestUserStore::new();

        store
            .expect_find()
            .times(1)
            .returning(|_, _| Ok(Some(stored_user())));
        store.expect_create().times(0);

        let service = AuthService::new(Arc::new(store));

        let result = service.sign_up(sign_up_command()).await;
        assert!(matches!(
            result.unwrap_err(),
            AuthError::EmailAlreadyInUse(_)
        ));
    }

    #[tokio::test]
    async fn test_sign_up_lost_race_maps_to_email_already_in_use() {
        let mut store = MockTestUserStore::new();

        // The pre-check passes, but another caller wins the insert; the
        // store's conflict signal is authoritative.
        store.expect_find().times(1).returning(|_, _| Ok(None));
        store
            .expect_create()
            .times(1)
            .returning(|user| Err(AuthError::EmailAlreadyInUse(user.email.as_str().to_string())));

        let service = AuthService::new(Arc::new(store));

        let result = service.sign_up(sign_up_command()).await;
        assert!(matches!(
            result.unwrap_err(),
            AuthError::EmailAlreadyInUse(_)
        ));
    }

    #[tokio::test]
    async fn test_sign_up_store_error_is_propagated() {
        let mut store = MockTestUserStore::new();

        store.expect_find().times(1).returning(|_, _| Ok(None));
        store
            .expect_create()
            .times(1)
            .returning(|_| Err(AuthError::Store("connection reset".to_string())));

        let service = AuthService::new(Arc::new(store));

        let result = service.sign_up(sign_up_command()).await;
        assert!(matches!(result.unwrap_err(), AuthError::Store(_)));
    }

    #[tokio::test]
    async fn test_sign_in_success() {
        let mut store = MockTestUserStore::new();

        store
            .expect_find()
            .withf(|tenant, email| tenant.as_str() == TENANT && email.as_str() == EMAIL)
            .times(1)
            .returning(|_, _| Ok(Some(stored_user())));

        let service = AuthService::new(Arc::new(store));

        let user = service
            .sign_in(sign_in_command(PASSWORD))
            .await
            .expect("Sign in failed");

        assert_eq!(user.tenant.as_str(), TENANT);
        assert_eq!(user.email.as_str(), EMAIL);
        assert_eq!(user.name, NAME);
    }

    #[tokio::test]
    async fn test_sign_in_unknown_identity_is_invalid_credentials() {
        let mut store = MockTestUserStore::new();

        store.expect_find().times(1).returning(|_, _| Ok(None));

        let service = AuthService::new(Arc::new(store));

        let result = service.sign_in(sign_in_command(PASSWORD)).await;
        assert!(matches!(
            result.unwrap_err(),
            AuthError::InvalidCredentials
        ));
    }

    #[tokio::test]
    async fn test_sign_in_wrong_password_is_invalid_credentials() {
        let mut store = MockTestUserStore::new();

        store
            .expect_find()
            .times(1)
            .returning(|_, _| Ok(Some(stored_user())));

        let service = AuthService::new(Arc::new(store));

        let result = service.sign_in(sign_in_command("wrong")).await;
        assert!(matches!(
            result.unwrap_err(),
            AuthError::InvalidCredentials
        ));
    }

    #[tokio::test]
    async fn test_sign_in_store_error_is_propagated() {
        let mut store = MockTestUserStore::new();

        store
            .expect_find()
            .times(1)
            .returning(|_, _| Err(AuthError::Store("connection reset".to_string())));

        let service = AuthService::new(Arc::new(store));

        let result = service.sign_in(sign_in_command(PASSWORD)).await;
        assert!(matches!(result.unwrap_err(), AuthError::Store(_)));
    }
}
