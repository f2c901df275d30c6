//! HTTP DTOs (Data Transfer Objects) for membership endpoints.
//!
//! These types define the JSON request/response structure for the membership API.
//! They serve as the boundary between HTTP and the application layer.

use serde::{Deserialize, Serialize};

use crate::application::handlers::membership::MembershipView;
use crate::domain::membership::Plan;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to confirm a gateway payment and upgrade.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmPaymentRequest {
    /// Gateway order identifier.
    pub order_id: String,
    /// Gateway payment identifier.
    pub payment_id: String,
    /// Lowercase hex signature over `order_id|payment_id`.
    pub signature: String,
    /// Paid plan the payment purchases.
    pub plan: Plan,
}

/// Request for an admin-granted upgrade.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminUpgradeRequest {
    /// User receiving the upgrade.
    pub user_id: String,
    /// Paid plan to grant.
    pub plan: Plan,
}

/// Request for an admin-driven renewal.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminRenewRequest {
    /// User whose window is extended.
    pub user_id: String,
}

/// Optional query parameters for membership reads.
///
/// Admins may read any user's entry by passing `user_id`; ordinary
/// callers always read their own.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MembershipQueryParams {
    #[serde(default)]
    pub user_id: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Membership details for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct MembershipResponse {
    /// User ID.
    pub user_id: String,
    /// Stored plan.
    pub plan: Plan,
    /// Plan currently in effect once lazy expiry is applied.
    pub effective_plan: Plan,
    /// When the current plan took effect (ISO 8601).
    pub since: String,
    /// End of the paid window (ISO 8601), null for free.
    pub valid_till: Option<String>,
    /// Whether the stored plan is currently active.
    pub is_active: bool,
}

impl From<MembershipView> for MembershipResponse {
    fn from(view: MembershipView) -> Self {
        Self {
            user_id: view.user_id.to_string(),
            plan: view.plan,
            effective_plan: view.effective_plan,
            since: view.since.as_datetime().to_rfc3339(),
            valid_till: view.valid_till.map(|t| t.as_datetime().to_rfc3339()),
            is_active: view.is_active,
        }
    }
}

/// Standard error response format.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable error message.
    pub error: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Timestamp, UserId};

    #[test]
    fn membership_response_serializes_paid_entry() {
        let view = MembershipView {
            user_id: UserId::new("user-1").unwrap(),
            plan: Plan::Pro,
            effective_plan: Plan::Pro,
            since: Timestamp::from_unix_secs(1_705_276_800),
            valid_till: Some(Timestamp::from_unix_secs(1_707_868_800)),
            is_active: true,
        };

        let json = serde_json::to_value(MembershipResponse::from(view)).unwrap();
        assert_eq!(json["plan"], "pro");
        assert_eq!(json["is_active"], true);
        assert!(json["valid_till"].as_str().unwrap().starts_with("2024-02"));
    }

    #[test]
    fn membership_response_serializes_free_entry_with_null_expiry() {
        let view = MembershipView {
            user_id: UserId::new("user-1").unwrap(),
            plan: Plan::Free,
            effective_plan: Plan::Free,
            since: Timestamp::from_unix_secs(1_705_276_800),
            valid_till: None,
            is_active: true,
        };

        let json = serde_json::to_value(MembershipResponse::from(view)).unwrap();
        assert!(json["valid_till"].is_null());
    }

    #[test]
    fn confirm_payment_request_deserializes() {
        let req: ConfirmPaymentRequest = serde_json::from_str(
            r#"{"order_id":"o1","payment_id":"p1","signature":"ab","plan":"elite"}"#,
        )
        .unwrap();
        assert_eq!(req.plan, Plan::Elite);
    }

    #[test]
    fn admin_upgrade_request_rejects_unknown_plan() {
        let result: Result<AdminUpgradeRequest, _> =
            serde_json::from_str(r#"{"user_id":"u1","plan":"platinum"}"#);
        assert!(result.is_err());
    }
}
