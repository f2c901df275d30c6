//! DowngradeMembershipHandler - Command handler for voluntary downgrades.

use std::sync::Arc;

use crate::domain::foundation::{Caller, ErrorCode, Timestamp, UserId};
use crate::domain::membership::{Entitlement, MembershipError, Plan};
use crate::ports::EntitlementStore;

use super::MAX_COMMIT_ATTEMPTS;

/// Command for a user to drop their own paid plan.
#[derive(Debug, Clone)]
pub struct DowngradeMembershipCommand {
    /// Authenticated caller.
    pub caller: Caller,
    /// Entry being downgraded; must belong to the caller.
    pub target_user_id: UserId,
}

/// Handler for voluntary downgrades.
///
/// Owner-only, takes effect immediately (no run-out of the paid window),
/// and is idempotent when the entry is already free.
pub struct DowngradeMembershipHandler {
    store: Arc<dyn EntitlementStore>,
}

impl DowngradeMembershipHandler {
    pub fn new(store: Arc<dyn EntitlementStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: DowngradeMembershipCommand,
    ) -> Result<Entitlement, MembershipError> {
        if !cmd.caller.owns(&cmd.target_user_id) {
            return Err(MembershipError::forbidden(
                "only the owner may downgrade their membership",
            ));
        }

        for _ in 0..MAX_COMMIT_ATTEMPTS {
            let mut entry = self
                .store
                .find(&cmd.target_user_id)
                .await?
                .unwrap_or_else(|| Entitlement::new_free(cmd.target_user_id.clone()));

            // Already free: nothing to write, keep the original `since`.
            if entry.plan == Plan::Free {
                return Ok(entry);
            }

            entry.downgrade(Timestamp::now());

            match self.store.commit(&entry).await {
                Ok(()) => {
                    entry.version += 1;
                    tracing::info!(user_id = %cmd.target_user_id, "membership downgraded to free");
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

    fn uid(s: &str) -> UserId {
        UserId::new(s).unwrap()
    }

    fn command() -> DowngradeMembershipCommand {
        DowngradeMembershipCommand {
            caller: Caller::User(uid("user-1")),
            target_user_id: uid("user-1"),
        }
    }

    #[tokio::test]
    async fn owner_downgrade_clears_paid_window() {
        let store = Arc::new(MockEntitlementStore::new());
        let mut existing = Entitlement::new_free(uid("user-1"));
        existing.upgrade(Plan::Elite, Timestamp::now()).unwrap();
        store.seed(existing);

        let handler = DowngradeMembershipHandler::new(store.clone());
        let entry = handler.handle(command()).await.unwrap();

        assert_eq!(entry.plan, Plan::Free);
        assert!(entry.valid_till.is_none());
        assert_eq!(store.get(&uid("user-1")).unwrap().plan, Plan::Free);
    }

    #[tokio::test]
    async fn downgrade_of_free_entry_is_idempotent() {
        let store = Arc::new(MockEntitlementStore::new());
        let existing = Entitlement::new_free(uid("user-1"));
        let since = existing.since;
        store.seed(existing);

        let handler = DowngradeMembershipHandler::new(store.clone());
        let first = handler.handle(command()).await.unwrap();
        let second = handler.handle(command()).await.unwrap();

        assert_eq!(first, second);
        // Repeated downgrades never touch `since`.
        assert_eq!(second.since, since);
    }

    #[tokio::test]
    async fn downgrade_of_absent_entry_succeeds_as_free() {
        let store = Arc::new(MockEntitlementStore::new());
        let handler = DowngradeMembershipHandler::new(store.clone());

        let entry = handler.handle(command()).await.unwrap();
        assert_eq!(entry.plan, Plan::Free);
    }

    #[tokio::test]
    async fn other_users_cannot_downgrade_someone_else() {
        let store = Arc::new(MockEntitlementStore::new());
        let mut existing = Entitlement::new_free(uid("user-1"));
        existing.upgrade(Plan::Pro, Timestamp::now()).unwrap();
        store.seed(existing);

        let handler = DowngradeMembershipHandler::new(store.clone());
        let err = handler
            .handle(DowngradeMembershipCommand {
                caller: Caller::User(uid("user-2")),
                target_user_id: uid("user-1"),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, MembershipError::Forbidden { .. }));
        assert_eq!(store.get(&uid("user-1")).unwrap().plan, Plan::Pro);
    }

    #[tokio::test]
    async fn admin_cannot_downgrade_on_behalf_of_user() {
        // Downgrade is owner-only even for admins; support flows go
        // through override upgrade or renewal instead.
        let store = Arc::new(MockEntitlementStore::new());
        let mut existing = Entitlement::new_free(uid("user-1"));
        existing.upgrade(Plan::Pro, Timestamp::now()).unwrap();
        store.seed(existing);

        let handler = DowngradeMembershipHandler::new(store);
        let err = handler
            .handle(DowngradeMembershipCommand {
                caller: Caller::Admin(uid("ops-1")),
                target_user_id: uid("user-1"),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, MembershipError::Forbidden { .. }));
    }
}
