//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `membership` - Entitlement ledger and plan transitions
//! - `payment` - Payment gateway confirmation verification
//! - `signing` - HMAC-SHA256 signing primitives
//! - `token` - Capability session tokens

pub mod foundation;
pub mod membership;
pub mod payment;
pub mod signing;
pub mod token;
