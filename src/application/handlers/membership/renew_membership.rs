//! RenewMembershipHandler - Command handler for admin-driven renewals.

use std::sync::Arc;

use crate::domain::foundation::{Caller, ErrorCode, Timestamp, UserId};
use crate::domain::membership::{Entitlement, MembershipError};
use crate::ports::EntitlementStore;

use super::MAX_COMMIT_ATTEMPTS;

/// Command to extend a user's paid window by one period.
#[derive(Debug, Clone)]
pub struct RenewMembershipCommand {
    /// Authenticated caller; must be an admin.
    pub caller: Caller,
    /// User whose window is extended.
    pub target_user_id: UserId,
}

/// Handler for renewals.
///
/// Renewing early stacks on the remaining window; renewing a lapsed entry
/// starts a fresh window from now. A free entry renews into Pro.
pub struct RenewMembershipHandler {
    store: Arc<dyn EntitlementStore>,
}

impl RenewMembershipHandler {
    pub fn new(store: Arc<dyn EntitlementStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: RenewMembershipCommand) -> Result<Entitlement, MembershipError> {
        if !cmd.caller.is_admin() {
            return Err(MembershipError::forbidden(
                "renewal requires an admin caller",
            ));
        }

        for _ in 0..MAX_COMMIT_ATTEMPTS {
            let mut entry = self
                .store
                .find(&cmd.target_user_id)
                .await?
                .unwrap_or_else(|| Entitlement::new_free(cmd.target_user_id.clone()));

            entry.renew(Timestamp::now());

            match self.store.commit(&entry).await {
                Ok(()) => {
                    entry.version += 1;
                    tracing::info!(
                        admin_id = %cmd.caller.user_id(),
                        user_id = %cmd.target_user_id,
                        plan = %entry.plan,
                        "membership renewed"
                    );
                    return Ok(entry);
                }
                Err(err) if err.code == ErrorCode::ConcurrentModification => continue,
                Err(err) => return Err(err.into()),
            }
        }

        Err(MembershipError::concurrent_modification(cmd.target_user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::membership::testing::MockEntitlementStore;
    use crate::domain::membership::{Plan, PERIOD_DAYS};

    fn uid(s: &str) -> UserId {
        UserId::new(s).unwrap()
    }

    fn command() -> RenewMembershipCommand {
        RenewMembershipCommand {
            caller: Caller::Admin(uid("ops-1")),
            target_user_id: uid("user-1"),
        }
    }

    #[tokio::test]
    async fn renewing_active_entry_stacks_remaining_time() {
        let store = Arc::new(MockEntitlementStore::new());
        let mut existing = Entitlement::new_free(uid("user-1"));
        existing.upgrade(Plan::Elite, Timestamp::now()).unwrap();
        let old_till = existing.valid_till.unwrap();
        store.seed(existing);

        let handler = RenewMembershipHandler::new(store.clone());
        let entry = handler.handle(command()).await.unwrap();

        // Nearly the full window remained, so the new expiry lands one
        // period past the old one.
        assert_eq!(entry.valid_till, Some(old_till.add_days(PERIOD_DAYS)));
        assert_eq!(entry.plan, Plan::Elite);
    }

    #[tokio::test]
    async fn renewing_lapsed_entry_starts_from_now() {
        let store = Arc::new(MockEntitlementStore::new());
        let mut existing = Entitlement::new_free(uid("user-1"));
        existing
            .upgrade(Plan::Pro, Timestamp::now().add_days(-90))
            .unwrap();
        store.seed(existing);

        let handler = RenewMembershipHandler::new(store.clone());
        let before = Timestamp::now();
        let entry = handler.handle(command()).await.unwrap();

        let till = entry.valid_till.unwrap();
        assert!(!till.is_before(&before.add_days(PERIOD_DAYS)));
        assert_eq!(entry.plan, Plan::Pro);
    }

    #[tokio::test]
    async fn renewing_unknown_user_creates_pro_entry() {
        let store = Arc::new(MockEntitlementStore::new());
        let handler = RenewMembershipHandler::new(store.clone());

        let entry = handler.handle(command()).await.unwrap();

        assert_eq!(entry.plan, Plan::Pro);
        assert!(store.get(&uid("user-1")).is_some());
    }

    #[tokio::test]
    async fn non_admin_caller_is_rejected() {
        let store = Arc::new(MockEntitlementStore::new());
        let handler = RenewMembershipHandler::new(store.clone());

        let err = handler
            .handle(RenewMembershipCommand {
                caller: Caller::User(uid("user-1")),
                target_user_id: uid("user-1"),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, MembershipError::Forbidden { .. }));
        assert!(store.get(&uid("user-1")).is_none());
    }

    #[tokio::test]
    async fn renew_gives_up_after_repeated_conflicts() {
        let store = Arc::new(MockEntitlementStore::new());
        store.fail_next_commits(MAX_COMMIT_ATTEMPTS);
        let handler = RenewMembershipHandler::new(store);

        let err = handler.handle(command()).await.unwrap_err();
        assert!(matches!(err, MembershipError::ConcurrentModification(_)));
    }
}
