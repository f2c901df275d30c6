//! HTTP adapter for session token endpoints.
//!
//! - `POST /api/session-token` - Mint a capability token for downstream services

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::TokenAppState;
pub use routes::token_routes;
