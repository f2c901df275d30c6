//! Session validator port.
//!
//! Defines the contract for validating inbound credentials and resolving
//! them to a caller identity.

use crate::domain::foundation::{AuthError, Caller};
use async_trait::async_trait;

/// Port for validating bearer credentials.
///
/// Implementations verify the credential (JWT signature, expiry) and map
/// its claims to a [`Caller`]. The HTTP auth middleware is the only
/// production consumer.
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a raw bearer token and resolve the caller.
    ///
    /// # Errors
    ///
    /// - `InvalidToken` if the credential fails verification
    /// - `TokenExpired` if it verified but has lapsed
    /// - `ServiceUnavailable` if the validator itself cannot operate
    async fn validate(&self, token: &str) -> Result<Caller, AuthError>;
}
