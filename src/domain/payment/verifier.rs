//! Payment gateway signature verification.
//!
//! The gateway signs `order_id|payment_id` with a shared secret; we recompute
//! and compare. Verification never mutates ledger state - it only gates
//! whether the upgrade-via-payment transition may proceed.

use crate::domain::signing::{constant_time_compare, Signer};

use super::confirmation::PaymentConfirmation;

/// Verifies gateway payment signatures.
#[derive(Clone)]
pub struct PaymentVerifier {
    signer: Signer,
}

impl PaymentVerifier {
    /// Creates a verifier over the gateway's shared secret.
    pub fn new(signer: Signer) -> Self {
        Self { signer }
    }

    /// Returns true iff `provided_hex` is the HMAC-SHA256 of
    /// `order_id|payment_id` under the shared secret.
    ///
    /// Comparison is constant-time over the decoded bytes; malformed hex
    /// verifies false rather than erroring.
    pub fn verify(&self, order_id: &str, payment_id: &str, provided_hex: &str) -> bool {
        let expected = self.signer.sign(signed_message(order_id, payment_id).as_bytes());

        match hex::decode(provided_hex) {
            Ok(provided) => constant_time_compare(&expected, &provided),
            Err(_) => false,
        }
    }

    /// Convenience form over a full confirmation.
    pub fn verify_confirmation(&self, confirmation: &PaymentConfirmation) -> bool {
        self.verify(
            &confirmation.order_id,
            &confirmation.payment_id,
            &confirmation.signature,
        )
    }
}

/// The exact byte string the gateway signs.
fn signed_message(order_id: &str, payment_id: &str) -> String {
    format!("{}|{}", order_id, payment_id)
}
