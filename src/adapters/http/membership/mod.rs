//! HTTP adapter for membership endpoints.
//!
//! Exposes the entitlement ledger via REST API:
//! - `GET /api/membership` - Get current user's membership
//! - `POST /api/membership/payment` - Confirm a gateway payment and upgrade
//! - `POST /api/membership/downgrade` - Drop the caller's paid plan
//! - `POST /api/membership/admin/upgrade` - Grant a paid plan (admin)
//! - `POST /api/membership/admin/renew` - Extend a paid window (admin)

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{MembershipApiError, MembershipAppState};
pub use routes::{membership_router, membership_routes};
