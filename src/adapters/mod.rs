//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Bearer token validation (JWT, mock)
//! - `http` - REST API exposure via axum
//! - `memory` - Process-local persistence

pub mod auth;
pub mod http;
pub mod memory;
