//! Axum router configuration for membership endpoints.
//!
//! This module defines the route structure for membership-related API endpoints
//! and wires them to their corresponding handlers.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    admin_renew, admin_upgrade, confirm_payment, downgrade_membership, get_membership,
    MembershipAppState,
};

/// Create the membership API router.
///
/// # Routes
///
/// ## User Endpoints (require authentication)
/// - `GET /` - Get current user's membership details
/// - `POST /payment` - Confirm a gateway payment and upgrade
/// - `POST /downgrade` - Drop the caller's paid plan
///
/// ## Admin Endpoints (require admin role)
/// - `POST /admin/upgrade` - Grant a paid plan without payment
/// - `POST /admin/renew` - Extend a user's paid window
pub fn membership_routes() -> Router<MembershipAppState> {
    Router::new()
        // User endpoints
        .route("/", get(get_membership))
        .route("/payment", post(confirm_payment))
        .route("/downgrade", post(downgrade_membership))
        // Admin endpoints
        .route("/admin/upgrade", post(admin_upgrade))
        .route("/admin/renew", post(admin_renew))
}

/// Create the complete membership module router.
///
/// Suitable for mounting under `/api`.
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use fitlive::adapters::http::membership::{membership_router, MembershipAppState};
///
/// let app_state = MembershipAppState { /* ... */ };
/// let app = Router::new()
///     .nest("/api", membership_router())
///     .with_state(app_state);
/// ```
pub fn membership_router() -> Router<MembershipAppState> {
    Router::new().nest("/membership", membership_routes())
}
