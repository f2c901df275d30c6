//! Membership-specific error types.
//!
//! Errors covering entitlement transitions, payment verification, and
//! access control.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | InvalidPlan | 400 |
//! | ValidationFailed | 400 |
//! | SignatureMismatch | 401 |
//! | Forbidden | 403 |
//! | ConcurrentModification | 409 |
//! | Infrastructure | 503 |

use crate::domain::foundation::{DomainError, ErrorCode, UserId, ValidationError};

/// Membership-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembershipError {
    /// The requested plan is not valid for this operation.
    InvalidPlan(String),

    /// Payment confirmation signature did not verify.
    SignatureMismatch,

    /// Caller lacks the rights for the requested operation.
    Forbidden { reason: String },

    /// The entry changed under us between read and write.
    ConcurrentModification(UserId),

    /// Validation failed.
    ValidationFailed { field: String, message: String },

    /// Backing store or downstream dependency failure.
    Infrastructure(String),
}

impl MembershipError {
    // Constructor functions for cleaner error creation

    pub fn invalid_plan(reason: impl Into<String>) -> Self {
        MembershipError::InvalidPlan(reason.into())
    }

    pub fn signature_mismatch() -> Self {
        MembershipError::SignatureMismatch
    }

    pub fn forbidden(reason: impl Into<String>) -> Self {
        MembershipError::Forbidden {
            reason: reason.into(),
        }
    }

    pub fn concurrent_modification(user_id: UserId) -> Self {
        MembershipError::ConcurrentModification(user_id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        MembershipError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        MembershipError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            MembershipError::InvalidPlan(_) => ErrorCode::InvalidArgument,
            MembershipError::SignatureMismatch => ErrorCode::SignatureMismatch,
            MembershipError::Forbidden { .. } => ErrorCode::Unauthorized,
            MembershipError::ConcurrentModification(_) => ErrorCode::ConcurrentModification,
            MembershipError::ValidationFailed { .. } => ErrorCode::InvalidArgument,
            MembershipError::Infrastructure(_) => ErrorCode::UpstreamUnavailable,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            MembershipError::InvalidPlan(reason) => format!("Invalid plan: {}", reason),
            MembershipError::SignatureMismatch => {
                "Payment signature verification failed".to_string()
            }
            MembershipError::Forbidden { reason } => format!("Forbidden: {}", reason),
            MembershipError::ConcurrentModification(user_id) => {
                format!("Membership for user {} was modified concurrently", user_id)
            }
            MembershipError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            MembershipError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }

    /// Returns true if this error should trigger a retry.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            MembershipError::Infrastructure(_) | MembershipError::ConcurrentModification(_)
        )
    }
}

impl std::fmt::Display for MembershipError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for MembershipError {}

impl From<ValidationError> for MembershipError {
    fn from(err: ValidationError) -> Self {
        MembershipError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for MembershipError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::InvalidArgument => MembershipError::ValidationFailed {
                field: "unknown".to_string(),
                message: err.to_string(),
            },
            ErrorCode::SignatureMismatch => MembershipError::SignatureMismatch,
            ErrorCode::Unauthorized => MembershipError::Forbidden {
                reason: err.to_string(),
            },
            _ => MembershipError::Infrastructure(err.to_string()),
        }
    }
}

impl From<MembershipError> for DomainError {
    fn from(err: MembershipError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user_id() -> UserId {
        UserId::new("user-test-123").unwrap()
    }

    // ============================================================
    // Constructor Tests
    // ============================================================

    #[test]
    fn invalid_plan_creates_correctly() {
        let err = MembershipError::invalid_plan("free is not purchasable");
        assert!(matches!(err, MembershipError::InvalidPlan(ref r) if r == "free is not purchasable"));
        assert_eq!(err.code(), ErrorCode::InvalidArgument);
    }

    #[test]
    fn signature_mismatch_creates_correctly() {
        let err = MembershipError::signature_mismatch();
        assert!(matches!(err, MembershipError::SignatureMismatch));
        assert_eq!(err.code(), ErrorCode::SignatureMismatch);
    }

    #[test]
    fn forbidden_creates_correctly() {
        let err = MembershipError::forbidden("admin role required");
        assert!(matches!(
            err,
            MembershipError::Forbidden { ref reason } if reason == "admin role required"
        ));
        assert_eq!(err.code(), ErrorCode::Unauthorized);
    }

    #[test]
    fn concurrent_modification_creates_correctly() {
        let user_id = test_user_id();
        let err = MembershipError::concurrent_modification(user_id.clone());
        assert!(matches!(err, MembershipError::ConcurrentModification(ref u) if *u == user_id));
        assert_eq!(err.code(), ErrorCode::ConcurrentModification);
    }

    #[test]
    fn validation_creates_correctly() {
        let err = MembershipError::validation("plan", "unknown plan name");
        assert!(matches!(
            err,
            MembershipError::ValidationFailed { ref field, ref message }
            if field == "plan" && message == "unknown plan name"
        ));
        assert_eq!(err.code(), ErrorCode::InvalidArgument);
    }

    #[test]
    fn infrastructure_creates_correctly() {
        let err = MembershipError::infrastructure("store unavailable");
        assert!(matches!(
            err,
            MembershipError::Infrastructure(ref m) if m == "store unavailable"
        ));
        assert_eq!(err.code(), ErrorCode::UpstreamUnavailable);
    }

    // ============================================================
    // Message Tests
    // ============================================================

    #[test]
    fn concurrent_modification_message_includes_user() {
        let user_id = test_user_id();
        let err = MembershipError::concurrent_modification(user_id.clone());
        assert!(err.message().contains(&user_id.to_string()));
    }

    #[test]
    fn validation_message_includes_field_and_reason() {
        let err = MembershipError::validation("ttl_seconds", "must be positive");
        let msg = err.message();
        assert!(msg.contains("ttl_seconds"));
        assert!(msg.contains("must be positive"));
    }

    // ============================================================
    // Retryable Tests
    // ============================================================

    #[test]
    fn infrastructure_errors_are_retryable() {
        let err = MembershipError::infrastructure("timeout");
        assert!(err.is_retryable());
    }

    #[test]
    fn concurrent_modification_is_retryable() {
        let err = MembershipError::concurrent_modification(test_user_id());
        assert!(err.is_retryable());
    }

    #[test]
    fn signature_mismatch_is_not_retryable() {
        assert!(!MembershipError::signature_mismatch().is_retryable());
    }

    #[test]
    fn validation_errors_are_not_retryable() {
        let err = MembershipError::validation("plan", "invalid");
        assert!(!err.is_retryable());
    }

    // ============================================================
    // Display Tests
    // ============================================================

    #[test]
    fn display_matches_message() {
        let err = MembershipError::invalid_plan("unknown");
        assert_eq!(format!("{}", err), err.message());
    }

    // ============================================================
    // Conversion Tests
    // ============================================================

    #[test]
    fn converts_to_domain_error() {
        let err = MembershipError::concurrent_modification(test_user_id());
        let domain_err: DomainError = err.clone().into();
        assert_eq!(domain_err.code, err.code());
    }

    #[test]
    fn converts_from_domain_error() {
        let domain_err = DomainError::new(ErrorCode::SignatureMismatch, "bad signature");
        let membership_err: MembershipError = domain_err.into();
        assert_eq!(membership_err.code(), ErrorCode::SignatureMismatch);
    }

    #[test]
    fn converts_from_validation_error() {
        let err: MembershipError = ValidationError::empty_field("order_id").into();
        assert_eq!(err.code(), ErrorCode::InvalidArgument);
    }
}
