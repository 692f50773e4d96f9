use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::Tenant;
use crate::domain::auth::models::User;
use crate::domain::auth::ports::UserStore;

/// Durable user store backed by PostgreSQL.
///
/// Uniqueness of `(tenant, email)` is enforced by the table's composite
/// primary key; a losing concurrent insert surfaces as a unique violation.
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn user_from_row(row: &PgRow) -> Result<User, AuthError> {
        let tenant: String = row
            .try_get("tenant")
            .map_err(|e| AuthError::Store(e.to_string()))?;
        let email: String = row
            .try_get("email")
            .map_err(|e| AuthError::Store(e.to_string()))?;
        let name: String = row
            .try_get("name")
            .map_err(|e| AuthError::Store(e.to_string()))?;
        let password_hash: String = row
            .try_get("password_hash")
            .map_err(|e| AuthError::Store(e.to_string()))?;

        Ok(User {
            tenant: Tenant::new(tenant)?,
            email: EmailAddress::new(email)?,
            name,
            password_hash,
        })
    }
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn find(
        &self,
        tenant: &Tenant,
        email: &EmailAddress,
    ) -> Result<Option<User>, AuthError> {
        let row = sqlx::query(
            r#"
            SELECT tenant, email, name, password_hash
            FROM users
            WHERE tenant = $1 AND email = $2
            "#,
        )
        .bind(tenant.as_str())
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::Store(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(Self::user_from_row(&r)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, user: User) -> Result<User, AuthError> {
        sqlx::query(
            r#"
            INSERT INTO users (tenant, email, name, password_hash)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user.tenant.as_str())
        .bind(user.email.as_str())
        .bind(user.name.as_str())
        .bind(user.password_hash.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AuthError::EmailAlreadyInUse(user.email.as_str().to_string());
                }
            }
            AuthError::Store(e.to_string())
        })?;

        Ok(user)
    }
}
