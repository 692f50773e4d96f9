use std::collections::hash_map::Entry;
use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::Tenant;
use crate::domain::auth::models::User;
use crate::domain::auth::ports::UserStore;

/// In-memory user store.
///
/// Deterministic backend for tests and local runs. Inserting only into a
/// vacant entry while holding the write lock gives the port's create
/// atomicity without a database.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<(String, String), User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(tenant: &Tenant, email: &EmailAddress) -> (String, String) {
        (tenant.as_str().to_string(), email.as_str().to_string())
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find(
        &self,
        tenant: &Tenant,
        email: &EmailAddress,
    ) -> Result<Option<User>, AuthError> {
        let users = self.users.read().await;
        Ok(users.get(&Self::key(tenant, email)).cloned())
    }

    async fn create(&self, user: User) -> Result<User, AuthError> {
        let mut users = self.users.write().await;
        match users.entry(Self::key(&user.tenant, &user.email)) {
            Entry::Occupied(_) => Err(AuthError::EmailAlreadyInUse(
                user.email.as_str().to_string(),
            )),
            Entry::Vacant(entry) => {
                entry.insert(user.clone());
                Ok(user)
            }
        }
    }
}
