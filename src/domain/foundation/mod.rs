//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, caller identity, and error types
//! that form the vocabulary of the fitlive domain.

mod caller;
mod errors;
mod ids;
mod timestamp;

pub use caller::{AuthError, Caller, CallerRole};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::UserId;
pub use timestamp::Timestamp;
