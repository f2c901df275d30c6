//! Entitlement store port.
//!
//! Defines the contract for persisting entitlement ledger entries.
//! Implementations handle the actual storage operations.
//!
//! # Design
//!
//! - **One entry per user**: the user id is the key
//! - **Optimistic concurrency**: writes carry the version read; a stale
//!   version fails the commit instead of overwriting
//! - **No deletes**: downgraded entries stay in the ledger as free

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::membership::Entitlement;
use async_trait::async_trait;

/// Store port for entitlement ledger persistence.
///
/// Per-user serialization is realized through compare-and-swap: `commit`
/// succeeds only if the stored version still matches the entry's version,
/// and bumps it on success. Handlers re-read and retry on conflict.
#[async_trait]
pub trait EntitlementStore: Send + Sync {
    /// Find the entitlement entry for a user.
    ///
    /// Returns `None` if the user has never had a paid transition;
    /// callers treat that as an implicit free entry.
    async fn find(&self, user_id: &UserId) -> Result<Option<Entitlement>, DomainError>;

    /// Commit an entry, creating it if absent.
    ///
    /// # Errors
    ///
    /// - `ConcurrentModification` if the stored version no longer matches
    ///   `entry.version`
    /// - `InternalError` on storage failure
    async fn commit(&self, entry: &Entitlement) -> Result<(), DomainError>;
}
