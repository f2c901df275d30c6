//! In-memory entitlement store.
//!
//! Backs the `EntitlementStore` port with a process-local map. Suitable for
//! a single instance and for tests; the CAS contract matches what a
//! database-backed adapter would enforce with a versioned UPDATE.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::membership::Entitlement;
use crate::ports::EntitlementStore;

/// Process-local entitlement ledger keyed by user id.
#[derive(Debug, Default)]
pub struct InMemoryEntitlementStore {
    entries: Mutex<HashMap<UserId, Entitlement>>,
}

impl InMemoryEntitlementStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries in the ledger.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl EntitlementStore for InMemoryEntitlementStore {
    async fn find(&self, user_id: &UserId) -> Result<Option<Entitlement>, DomainError> {
        Ok(self.entries.lock().unwrap().get(user_id).cloned())
    }

    async fn commit(&self, entry: &Entitlement) -> Result<(), DomainError> {
        let mut entries = self.entries.lock().unwrap();

        match entries.get_mut(&entry.user_id) {
            Some(existing) => {
                if existing.version != entry.version {
                    return Err(DomainError::new(
                        ErrorCode::ConcurrentModification,
                        format!("stale version for user {}", entry.user_id),
                    ));
                }
                let mut updated = entry.clone();
                updated.version += 1;
                *existing = updated;
            }
            None => {
                // Creation races on the same key resolve the same way as
                // updates: the first writer wins, the second sees a conflict.
                if entry.version != 0 {
                    return Err(DomainError::new(
                        ErrorCode::ConcurrentModification,
                        format!("stale version for user {}", entry.user_id),
                    ));
                }
                let mut created = entry.clone();
                created.version = 1;
                entries.insert(created.user_id.clone(), created);
            }
        }
        Ok(())
    }
}
