//! ConfirmPaymentHandler - Command handler for the upgrade-via-payment path.

use std::sync::Arc;

use crate::domain::foundation::{Caller, ErrorCode, Timestamp};
use crate::domain::membership::{Entitlement, MembershipError, Plan};
use crate::domain::payment::{PaymentConfirmation, PaymentVerifier};
use crate::ports::EntitlementStore;

use super::MAX_COMMIT_ATTEMPTS;

/// Command to confirm a gateway payment and upgrade the caller's plan.
#[derive(Debug, Clone)]
pub struct ConfirmPaymentCommand {
    /// Authenticated caller; the upgrade applies to their own entry.
    pub caller: Caller,
    /// Gateway order identifier.
    pub order_id: String,
    /// Gateway payment identifier.
    pub payment_id: String,
    /// Lowercase hex signature over `order_id|payment_id`.
    pub signature: String,
    /// Paid plan the payment purchases.
    pub plan: Plan,
}

/// Handler for payment-backed upgrades.
///
/// Verifies the gateway signature, then applies the upgrade transition to
/// the caller's entry under optimistic concurrency.
pub struct ConfirmPaymentHandler {
    store: Arc<dyn EntitlementStore>,
    verifier: PaymentVerifier,
}

impl ConfirmPaymentHandler {
    pub fn new(store: Arc<dyn EntitlementStore>, verifier: PaymentVerifier) -> Self {
        Self { store, verifier }
    }

    pub async fn handle(&self, cmd: ConfirmPaymentCommand) -> Result<Entitlement, MembershipError> {
        // 1. Validate the confirmation shape before any cryptographic work
        let confirmation =
            PaymentConfirmation::new(cmd.order_id, cmd.payment_id, cmd.signature, cmd.plan)?;

        // 2. Verify the gateway signature
        if !self.verifier.verify_confirmation(&confirmation) {
            tracing::warn!(
                user_id = %cmd.caller.user_id(),
                order_id = %confirmation.order_id,
                "payment signature verification failed"
            );
            return Err(MembershipError::signature_mismatch());
        }

        // 3. Apply the upgrade under CAS, retrying on conflict
        let user_id = cmd.caller.user_id().clone();
        for _ in 0..MAX_COMMIT_ATTEMPTS {
            let mut entry = self
                .store
                .find(&user_id)
                .await?
                .unwrap_or_else(|| Entitlement::new_free(user_id.clone()));

            entry.upgrade(confirmation.plan, Timestamp::now())?;

            match self.store.commit(&entry).await {
                Ok(()) => {
                    entry.version += 1;
                    tracing::info!(
                        user_id = %user_id,
                        plan = %entry.plan,
                        order_id = %confirmation.order_id,
                        "membership upgraded via payment"
                    );
                    return Ok(entry);
                }
                Err(err) if err.code == ErrorCode::ConcurrentModification => continue,
                Err(err) => return Err(err.into()),
            }
        }

        Err(MembershipError::concurrent_modification(user_id))
    }
}
