//! HTTP handlers for session token endpoints.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::adapters::http::membership::MembershipApiError;
use crate::adapters::http::middleware::RequireCaller;
use crate::application::handlers::token::{IssueSessionTokenCommand, IssueSessionTokenHandler};
use crate::domain::token::TokenIssuer;
use crate::ports::EntitlementStore;

use super::dto::{IssueTokenRequest, TokenResponse};

/// Shared application state for token endpoints.
#[derive(Clone)]
pub struct TokenAppState {
    pub issuer: TokenIssuer,
    pub entitlement_store: Arc<dyn EntitlementStore>,
}

impl TokenAppState {
    pub fn issue_handler(&self) -> IssueSessionTokenHandler {
        IssueSessionTokenHandler::new(self.issuer.clone(), self.entitlement_store.clone())
    }
}

/// POST /api/session-token - Mint a session token
///
/// The subject defaults to the caller; admins may mint for any subject.
pub async fn issue_session_token(
    State(state): State<TokenAppState>,
    RequireCaller(caller): RequireCaller,
    Json(request): Json<IssueTokenRequest>,
) -> Result<impl IntoResponse, MembershipApiError> {
    let subject_id = request
        .subject_id
        .unwrap_or_else(|| caller.user_id().as_str().to_string());

    let handler = state.issue_handler();
    let token = handler
        .handle(IssueSessionTokenCommand {
            caller,
            subject_id,
            ttl_seconds: request.ttl_seconds,
            payload: request.payload,
        })
        .await?;

    Ok(Json(TokenResponse {
        token: token.as_str().to_string(),
    }))
}
