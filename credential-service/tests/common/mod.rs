use std::sync::Arc;

use auth::TokenIssuer;
use chrono::Duration;
use credential_service::domain::auth::service::AuthService;
use credential_service::inbound::http::router::create_router;
use credential_service::outbound::repositories::InMemoryUserStore;
use serde_json::json;

pub const JWT_SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const TOKEN_VALIDITY_DAYS: i64 = 30;

/// Test application that spawns the real router on a random port, backed by
/// the in-memory store so the suite needs no external services.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let user_store = Arc::new(InMemoryUserStore::new());
        let auth_service = Arc::new(AuthService::new(user_store));
        let token_issuer = Arc::new(
            TokenIssuer::new(JWT_SECRET.as_bytes(), Duration::days(TOKEN_VALIDITY_DAYS))
                .expect("Failed to create token issuer"),
        );

        let application = create_router(auth_service, token_issuer);
        tokio::spawn(async move { axum::serve(listener, application).await });

        Self {
            address,
            api_client: reqwest::Client::new(),
        }
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub async fn sign_up(
        &self,
        tenant: &str,
        email: &str,
        name: &str,
        password: &str,
    ) -> reqwest::Response {
        self.post("/api/auth/signup")
            .json(&json!({
                "tenant": tenant,
                "email": email,
                "name": name,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn sign_in(&self, tenant: &str, email: &str, password: &str) -> reqwest::Response {
        self.post("/api/auth/signin")
            .json(&json!({
                "tenant": tenant,
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }
}
