//! OverrideUpgradeHandler - Command handler for admin-granted upgrades.

use std::sync::Arc;

use crate::domain::foundation::{Caller, ErrorCode, Timestamp, UserId};
use crate::domain::membership::{Entitlement, MembershipError, Plan};
use crate::ports::EntitlementStore;

use super::MAX_COMMIT_ATTEMPTS;

/// Command to grant a paid plan without payment verification.
#[derive(Debug, Clone)]
pub struct OverrideUpgradeCommand {
    /// Authenticated caller; must be an admin.
    pub caller: Caller,
    /// User receiving the upgrade.
    pub target_user_id: UserId,
    /// Paid plan to grant.
    pub plan: Plan,
}

/// Handler for administrative upgrades (comped accounts, support recovery).
///
/// Effect on the ledger is identical to a verified payment; only the
/// authorization gate differs.
pub struct OverrideUpgradeHandler {
    store: Arc<dyn EntitlementStore>,
}

impl OverrideUpgradeHandler {
    pub fn new(store: Arc<dyn EntitlementStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: OverrideUpgradeCommand) -> Result<Entitlement, MembershipError> {
        if !cmd.caller.is_admin() {
            return Err(MembershipError::forbidden(
                "override upgrade requires an admin caller",
            ));
        }

        for _ in 0..MAX_COMMIT_ATTEMPTS {
            let mut entry = self
                .store
                .find(&cmd.target_user_id)
                .await?
                .unwrap_or_else(|| Entitlement::new_free(cmd.target_user_id.clone()));

            entry.upgrade(cmd.plan, Timestamp::now())?;

            match self.store.commit(&entry).await {
                Ok(()) => {
                    entry.version += 1;
                    tracing::info!(
                        admin_id = %cmd.caller.user_id(),
                        user_id = %cmd.target_user_id,
                        plan = %entry.plan,
                        "membership upgraded by admin override"
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

    fn uid(s: &str) -> UserId {
        UserId::new(s).unwrap()
    }

    fn command(caller: Caller, plan: Plan) -> OverrideUpgradeCommand {
        OverrideUpgradeCommand {
            caller,
            target_user_id: uid("user-1"),
            plan,
        }
    }

    #[tokio::test]
    async fn admin_can_grant_paid_plan_without_payment() {
        let store = Arc::new(MockEntitlementStore::new());
        let handler = OverrideUpgradeHandler::new(store.clone());

        let entry = handler
            .handle(command(Caller::Admin(uid("ops-1")), Plan::Elite))
            .await
            .unwrap();

        assert_eq!(entry.plan, Plan::Elite);
        assert!(entry.valid_till.is_some());
        assert_eq!(store.get(&uid("user-1")).unwrap().plan, Plan::Elite);
    }

    #[tokio::test]
    async fn non_admin_caller_is_rejected() {
        let store = Arc::new(MockEntitlementStore::new());
        let handler = OverrideUpgradeHandler::new(store.clone());

        let err = handler
            .handle(command(Caller::User(uid("user-1")), Plan::Pro))
            .await
            .unwrap_err();

        assert!(matches!(err, MembershipError::Forbidden { .. }));
        assert!(store.get(&uid("user-1")).is_none());
    }

    #[tokio::test]
    async fn granting_free_is_rejected() {
        let store = Arc::new(MockEntitlementStore::new());
        let handler = OverrideUpgradeHandler::new(store);

        let err = handler
            .handle(command(Caller::Admin(uid("ops-1")), Plan::Free))
            .await
            .unwrap_err();

        assert!(matches!(err, MembershipError::InvalidPlan(_)));
    }

    #[tokio::test]
    async fn override_replaces_existing_paid_window() {
        let store = Arc::new(MockEntitlementStore::new());
        let mut existing = Entitlement::new_free(uid("user-1"));
        existing.upgrade(Plan::Pro, Timestamp::now()).unwrap();
        store.seed(existing);

        let handler = OverrideUpgradeHandler::new(store.clone());
        let entry = handler
            .handle(command(Caller::Admin(uid("ops-1")), Plan::Elite))
            .await
            .unwrap();

        assert_eq!(entry.plan, Plan::Elite);
        assert_eq!(entry.version, 1);
    }
}
