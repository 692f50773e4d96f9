use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::errors::EmailError;
use crate::domain::auth::errors::TenantError;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::SignUpCommand;
use crate::domain::auth::models::Tenant;
use crate::domain::auth::models::User;
use crate::domain::auth::ports::AuthUseCase;
use crate::domain::auth::ports::UserStore;
use crate::inbound::http::router::AppState;

pub async fn sign_up<S: UserStore>(
    State(state): State<AppState<S>>,
    Json(body): Json<SignUpRequest>,
) -> Result<ApiSuccess<SignUpResponseData>, ApiError> {
    state
        .auth_service
        .sign_up(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}

/// HTTP request body for registering an identity (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignUpRequest {
    tenant: String,
    email: String,
    name: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseSignUpRequestError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid tenant: {0}")]
    Tenant(#[from] TenantError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),
}

impl SignUpRequest {
    fn try_into_command(self) -> Result<SignUpCommand, ParseSignUpRequestError> {
        if self.name.is_empty() {
            return Err(ParseSignUpRequestError::MissingField("name"));
        }
        if self.password.is_empty() {
            return Err(ParseSignUpRequestError::MissingField("password"));
        }
        let tenant = Tenant::new(self.tenant)?;
        let email = EmailAddress::new(self.email)?;
        Ok(SignUpCommand::new(tenant, email, self.name, self.password))
    }
}

impl From<ParseSignUpRequestError> for ApiError {
    fn from(err: ParseSignUpRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

/// Identity projection returned to the caller; the password hash never
/// leaves the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignUpResponseData {
    pub tenant: String,
    pub email: String,
    pub name: String,
}

impl From<&User> for SignUpResponseData {
    fn from(user: &User) -> Self {
        Self {
            tenant: user.tenant.as_str().to_string(),
            email: user.email.as_str().to_string(),
            name: user.name.clone(),
        }
    }
}
