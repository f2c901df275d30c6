//! GetMembershipHandler - Query handler for reading an entitlement entry.

use std::sync::Arc;

use crate::domain::foundation::{Caller, Timestamp, UserId};
use crate::domain::membership::{Entitlement, MembershipError, Plan};
use crate::ports::EntitlementStore;

/// Query for a user's current membership state.
#[derive(Debug, Clone)]
pub struct GetMembershipQuery {
    /// Authenticated caller.
    pub caller: Caller,
    /// Entry being read; owners read their own, admins read any.
    pub target_user_id: UserId,
}

/// Read-model view of an entitlement entry.
///
/// Expiry is applied lazily at read time: `effective_plan` already accounts
/// for a lapsed window, while `plan` is the stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipView {
    pub user_id: UserId,
    pub plan: Plan,
    pub effective_plan: Plan,
    pub since: Timestamp,
    pub valid_till: Option<Timestamp>,
    pub is_active: bool,
}

impl MembershipView {
    fn from_entry(entry: &Entitlement, now: Timestamp) -> Self {
        Self {
            user_id: entry.user_id.clone(),
            plan: entry.plan,
            effective_plan: entry.effective_plan(now),
            since: entry.since,
            valid_till: entry.valid_till,
            is_active: entry.is_active(now),
        }
    }
}

/// Handler for membership reads.
pub struct GetMembershipHandler {
    store: Arc<dyn EntitlementStore>,
}

impl GetMembershipHandler {
    pub fn new(store: Arc<dyn EntitlementStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetMembershipQuery) -> Result<MembershipView, MembershipError> {
        if !query.caller.owns(&query.target_user_id) && !query.caller.is_admin() {
            return Err(MembershipError::forbidden(
                "only the owner or an admin may read this membership",
            ));
        }

        let now = Timestamp::now();
        let entry = self
            .store
            .find(&query.target_user_id)
            .await?
            .unwrap_or_else(|| Entitlement::new_free(query.target_user_id.clone()));

        Ok(MembershipView::from_entry(&entry, now))
    }
}
