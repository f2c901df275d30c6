//! HTTP handlers for membership endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::middleware::RequireCaller;
use crate::application::handlers::membership::{
    ConfirmPaymentCommand, ConfirmPaymentHandler, DowngradeMembershipCommand,
    DowngradeMembershipHandler, GetMembershipHandler, GetMembershipQuery, OverrideUpgradeCommand,
    OverrideUpgradeHandler, RenewMembershipCommand, RenewMembershipHandler,
};
use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::membership::{Entitlement, MembershipError};
use crate::domain::payment::PaymentVerifier;
use crate::ports::EntitlementStore;

use super::dto::{
    AdminRenewRequest, AdminUpgradeRequest, ConfirmPaymentRequest, ErrorResponse,
    MembershipQueryParams, MembershipResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all membership dependencies.
///
/// This struct is cloned for each request and contains Arc-wrapped dependencies
/// for efficient sharing across handlers.
#[derive(Clone)]
pub struct MembershipAppState {
    pub entitlement_store: Arc<dyn EntitlementStore>,
    pub payment_verifier: PaymentVerifier,
}

impl MembershipAppState {
    /// Create handlers on demand from the shared state.
    pub fn get_membership_handler(&self) -> GetMembershipHandler {
        GetMembershipHandler::new(self.entitlement_store.clone())
    }

    pub fn confirm_payment_handler(&self) -> ConfirmPaymentHandler {
        ConfirmPaymentHandler::new(self.entitlement_store.clone(), self.payment_verifier.clone())
    }

    pub fn override_upgrade_handler(&self) -> OverrideUpgradeHandler {
        OverrideUpgradeHandler::new(self.entitlement_store.clone())
    }

    pub fn renew_handler(&self) -> RenewMembershipHandler {
        RenewMembershipHandler::new(self.entitlement_store.clone())
    }

    pub fn downgrade_handler(&self) -> DowngradeMembershipHandler {
        DowngradeMembershipHandler::new(self.entitlement_store.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/membership - Get the caller's membership details
///
/// Admins may pass `?user_id=` to read another user's entry.
pub async fn get_membership(
    State(state): State<MembershipAppState>,
    RequireCaller(caller): RequireCaller,
    Query(params): Query<MembershipQueryParams>,
) -> Result<impl IntoResponse, MembershipApiError> {
    let target_user_id = match params.user_id {
        Some(raw) => UserId::new(raw).map_err(MembershipError::from)?,
        None => caller.user_id().clone(),
    };

    let handler = state.get_membership_handler();
    let view = handler
        .handle(GetMembershipQuery {
            caller,
            target_user_id,
        })
        .await?;

    Ok(Json(MembershipResponse::from(view)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/membership/payment - Confirm a gateway payment and upgrade
pub async fn confirm_payment(
    State(state): State<MembershipAppState>,
    RequireCaller(caller): RequireCaller,
    Json(request): Json<ConfirmPaymentRequest>,
) -> Result<impl IntoResponse, MembershipApiError> {
    let handler = state.confirm_payment_handler();
    let entry = handler
        .handle(ConfirmPaymentCommand {
            caller,
            order_id: request.order_id,
            payment_id: request.payment_id,
            signature: request.signature,
            plan: request.plan,
        })
        .await?;

    Ok(Json(membership_response(&entry)))
}

/// POST /api/membership/downgrade - Drop the caller's paid plan
pub async fn downgrade_membership(
    State(state): State<MembershipAppState>,
    RequireCaller(caller): RequireCaller,
) -> Result<impl IntoResponse, MembershipApiError> {
    let target_user_id = caller.user_id().clone();
    let handler = state.downgrade_handler();
    let entry = handler
        .handle(DowngradeMembershipCommand {
            caller,
            target_user_id,
        })
        .await?;

    Ok(Json(membership_response(&entry)))
}

/// POST /api/membership/admin/upgrade - Grant a paid plan (admin only)
pub async fn admin_upgrade(
    State(state): State<MembershipAppState>,
    RequireCaller(caller): RequireCaller,
    Json(request): Json<AdminUpgradeRequest>,
) -> Result<impl IntoResponse, MembershipApiError> {
    let target_user_id = UserId::new(request.user_id).map_err(MembershipError::from)?;

    let handler = state.override_upgrade_handler();
    let entry = handler
        .handle(OverrideUpgradeCommand {
            caller,
            target_user_id,
            plan: request.plan,
        })
        .await?;

    Ok(Json(membership_response(&entry)))
}

/// POST /api/membership/admin/renew - Extend a paid window (admin only)
pub async fn admin_renew(
    State(state): State<MembershipAppState>,
    RequireCaller(caller): RequireCaller,
    Json(request): Json<AdminRenewRequest>,
) -> Result<impl IntoResponse, MembershipApiError> {
    let target_user_id = UserId::new(request.user_id).map_err(MembershipError::from)?;

    let handler = state.renew_handler();
    let entry = handler
        .handle(RenewMembershipCommand {
            caller,
            target_user_id,
        })
        .await?;

    Ok(Json(membership_response(&entry)))
}

/// Renders a committed entry the same way the read path does.
fn membership_response(entry: &Entitlement) -> MembershipResponse {
    let now = Timestamp::now();
    MembershipResponse {
        user_id: entry.user_id.to_string(),
        plan: entry.plan,
        effective_plan: entry.effective_plan(now),
        since: entry.since.as_datetime().to_rfc3339(),
        valid_till: entry.valid_till.map(|t| t.as_datetime().to_rfc3339()),
        is_active: entry.is_active(now),
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts domain errors to HTTP responses.
pub struct MembershipApiError(MembershipError);

impl From<MembershipError> for MembershipApiError {
    fn from(err: MembershipError) -> Self {
        Self(err)
    }
}

impl IntoResponse for MembershipApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_code) = match &self.0 {
            MembershipError::InvalidPlan(_) => (StatusCode::BAD_REQUEST, "INVALID_PLAN"),
            MembershipError::SignatureMismatch => (StatusCode::UNAUTHORIZED, "SIGNATURE_MISMATCH"),
            MembershipError::Forbidden { .. } => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            MembershipError::ConcurrentModification(_) => {
                (StatusCode::CONFLICT, "CONCURRENT_MODIFICATION")
            }
            MembershipError::ValidationFailed { .. } => {
                (StatusCode::BAD_REQUEST, "VALIDATION_FAILED")
            }
            MembershipError::Infrastructure(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "UPSTREAM_UNAVAILABLE")
            }
        };

        // Use the error's built-in message() method for consistent messaging
        let message = self.0.message();
        let body = ErrorResponse::new(error_code, message);
        (status, Json(body)).into_response()
    }
}
