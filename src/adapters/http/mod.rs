//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod app;
pub mod membership;
pub mod middleware;
pub mod token;

// Re-export key types for convenience
pub use app::build_app;
pub use membership::{membership_router, MembershipAppState};
pub use token::{token_routes, TokenAppState};
