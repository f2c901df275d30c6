//! Payment module - gateway confirmation verification.

mod confirmation;
mod verifier;

pub use confirmation::PaymentConfirmation;
pub use verifier::PaymentVerifier;
