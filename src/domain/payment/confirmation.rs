//! Payment confirmation as returned by the external gateway.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;
use crate::domain::membership::Plan;

/// A completed-payment confirmation handed back by the gateway.
///
/// Ephemeral: consumed exactly once by the verifier, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    /// Gateway order identifier created before checkout.
    pub order_id: String,

    /// Gateway payment identifier returned after capture.
    pub payment_id: String,

    /// Lowercase hex HMAC-SHA256 over `order_id|payment_id`.
    pub signature: String,

    /// Plan the payment purchases. Must be a paid plan.
    pub plan: Plan,
}

impl PaymentConfirmation {
    /// Builds a confirmation, rejecting malformed fields before any
    /// cryptographic work.
    pub fn new(
        order_id: impl Into<String>,
        payment_id: impl Into<String>,
        signature: impl Into<String>,
        plan: Plan,
    ) -> Result<Self, ValidationError> {
        let order_id = order_id.into();
        let payment_id = payment_id.into();
        let signature = signature.into();

        if order_id.is_empty() {
            return Err(ValidationError::empty_field("order_id"));
        }
        if payment_id.is_empty() {
            return Err(ValidationError::empty_field("payment_id"));
        }
        if signature.is_empty() {
            return Err(ValidationError::empty_field("signature"));
        }
        if !plan.is_paid() {
            return Err(ValidationError::invalid_format(
                "plan",
                "payment confirmations must name a paid plan",
            ));
        }

        Ok(Self {
            order_id,
            payment_id,
            signature,
            plan,
        })
    }
}
