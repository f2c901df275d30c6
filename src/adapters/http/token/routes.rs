//! Axum router configuration for session token endpoints.

use axum::{routing::post, Router};

use super::handlers::{issue_session_token, TokenAppState};

/// Create the session token router.
///
/// # Routes
/// - `POST /session-token` - Mint a session token (requires authentication)
pub fn token_routes() -> Router<TokenAppState> {
    Router::new().route("/session-token", post(issue_session_token))
}
