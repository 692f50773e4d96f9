use axum::extract::State;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::errors::EmailError;
use crate::domain::auth::errors::TenantError;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::SignInCommand;
use crate::domain::auth::models::Tenant;
use crate::domain::auth::models::User;
use crate::domain::auth::ports::AuthUseCase;
use crate::domain::auth::ports::UserStore;
use crate::inbound::http::router::AppState;

/// Response header conveying the issued token out of band.
pub const TOKEN_HEADER: &str = "x-jwt-token";

pub async fn sign_in<S: UserStore>(
    State(state): State<AppState<S>>,
    Json(body): Json<SignInRequest>,
) -> Result<Response, ApiError> {
    let user = state
        .auth_service
        .sign_in(body.try_into_command()?)
        .await?;

    let token = state
        .token_issuer
        .issue(user.tenant.as_str(), user.email.as_str())?;
    let token = HeaderValue::from_str(&token)
        .map_err(|e| ApiError::InternalServerError(format!("Malformed token header: {}", e)))?;

    let mut response =
        ApiSuccess::new(StatusCode::OK, SignInResponseData::from(&user)).into_response();
    response.headers_mut().insert(TOKEN_HEADER, token);

    Ok(response)
}

/// HTTP request body for verifying credentials (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignInRequest {
    tenant: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseSignInRequestError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid tenant: {0}")]
    Tenant(#[from] TenantError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),
}

impl SignInRequest {
    fn try_into_command(self) -> Result<SignInCommand, ParseSignInRequestError> {
        if self.password.is_empty() {
            return Err(ParseSignInRequestError::MissingField("password"));
        }
        let tenant = Tenant::new(self.tenant)?;
        let email = EmailAddress::new(self.email)?;
        Ok(SignInCommand::new(tenant, email, self.password))
    }
}

impl From<ParseSignInRequestError> for ApiError {
    fn from(err: ParseSignInRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignInResponseData {
    pub tenant: String,
    pub email: String,
    pub name: String,
}

impl From<&User> for SignInResponseData {
    fn from(user: &User) -> Self {
        Self {
            tenant: user.tenant.as_str().to_string(),
            email: user.email.as_str().to_string(),
            name: user.name.clone(),
        }
    }
}
