use std::sync::Arc;
use std::time::Duration;

use auth::TokenIssuer;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::sign_in::sign_in;
use super::handlers::sign_up::sign_up;
use crate::domain::auth::ports::UserStore;
use crate::domain::auth::service::AuthService;

/// Shared application state.
///
/// Store handle and signing secret are established at startup and never
/// mutated; generic over the store so tests can run on the in-memory
/// backend.
pub struct AppState<S: UserStore> {
    pub auth_service: Arc<AuthService<S>>,
    pub token_issuer: Arc<TokenIssuer>,
}

impl<S: UserStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            auth_service: Arc::clone(&self.auth_service),
            token_issuer: Arc::clone(&self.token_issuer),
        }
    }
}

pub fn create_router<S: UserStore>(
    auth_service: Arc<AuthService<S>>,
    token_issuer: Arc<TokenIssuer>,
) -> Router {
    let state = AppState {
        auth_service,
        token_issuer,
    };

    let routes = Router::new()
        .route("/api/auth/signup", post(sign_up::<S>))
        .route("/api/auth/signin", post(sign_in::<S>));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
