//! Caller identity for the domain layer.
//!
//! A caller is resolved **once** at the boundary from a validated bearer
//! token and carried through handlers as a tagged variant. Ledger logic
//! branches on the variant rather than inspecting role strings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::UserId;

/// Authenticated caller, resolved at the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Caller {
    /// Ordinary user: may read and downgrade their own entitlement, upgrade
    /// via the payment path, and request tokens for themselves.
    User(UserId),

    /// Administrative caller (trainer/operator/support): may apply override
    /// upgrades and renewals, and request tokens for any subject.
    Admin(UserId),
}

impl Caller {
    /// Returns the identity behind the caller, regardless of role.
    pub fn user_id(&self) -> &UserId {
        match self {
            Caller::User(id) | Caller::Admin(id) => id,
        }
    }

    /// Returns true for administrative callers.
    pub fn is_admin(&self) -> bool {
        matches!(self, Caller::Admin(_))
    }

    /// Returns true if the caller owns the given entitlement entry.
    pub fn owns(&self, user_id: &UserId) -> bool {
        self.user_id() == user_id
    }
}

/// Role claim carried in the caller's bearer token.
///
/// Anything other than `admin` is treated as `user`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallerRole {
    User,
    Admin,
}

impl CallerRole {
    /// Builds a caller from a role claim and identity.
    pub fn into_caller(self, user_id: UserId) -> Caller {
        match self {
            CallerRole::User => Caller::User(user_id),
            CallerRole::Admin => Caller::Admin(user_id),
        }
    }
}

/// Authentication errors that can occur during bearer token validation.
///
/// These are domain-centric: they describe what went wrong from the
/// application's perspective, not the auth provider's.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired (separate from InvalidToken for specific handling).
    #[error("Token expired")]
    TokenExpired,

    /// The authentication service is unavailable (network, config, etc.).
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uid(s: &str) -> UserId {
        UserId::new(s).unwrap()
    }

    #[test]
    fn user_caller_is_not_admin() {
        let caller = Caller::User(uid("user-1"));
        assert!(!caller.is_admin());
        assert_eq!(caller.user_id().as_str(), "user-1");
    }

    #[test]
    fn admin_caller_is_admin() {
        let caller = Caller::Admin(uid("ops-1"));
        assert!(caller.is_admin());
    }

    #[test]
    fn caller_owns_matching_user_id() {
        let caller = Caller::User(uid("user-1"));
        assert!(caller.owns(&uid("user-1")));
        assert!(!caller.owns(&uid("user-2")));
    }

    #[test]
    fn role_claim_deserializes_from_lowercase() {
        let role: CallerRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, CallerRole::Admin);

        let role: CallerRole = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, CallerRole::User);
    }

    #[test]
    fn role_builds_matching_caller_variant() {
        assert!(CallerRole::Admin.into_caller(uid("a")).is_admin());
        assert!(!CallerRole::User.into_caller(uid("u")).is_admin());
    }

    #[test]
    fn service_unavailable_carries_its_message() {
        let err = AuthError::service_unavailable("issuer unreachable");
        assert_eq!(err.to_string(), "Auth service unavailable: issuer unreachable");
    }
}
