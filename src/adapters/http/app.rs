//! Top-level HTTP application assembly.
//!
//! Composes the per-module routers, the auth middleware, and the
//! cross-cutting tower layers into one serveable `Router`.

use std::time::Duration;

use axum::http::HeaderValue;
use axum::{http::StatusCode, middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::membership::{membership_router, MembershipAppState};
use super::middleware::{auth_middleware, AuthState};
use super::token::{token_routes, TokenAppState};

/// Builds the complete API application.
///
/// All `/api` routes sit behind the auth middleware; `/health` does not.
pub fn build_app(
    auth_state: AuthState,
    membership_state: MembershipAppState,
    token_state: TokenAppState,
    server: &ServerConfig,
) -> Router {
    let api = Router::new()
        .merge(membership_router().with_state(membership_state))
        .merge(token_routes().with_state(token_state))
        .layer(middleware::from_fn_with_state(auth_state, auth_middleware));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(server))
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
}

/// CORS from configuration; permissive when no origins are configured.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// GET /health - liveness probe
async fn health() -> StatusCode {
    StatusCode::OK
}
