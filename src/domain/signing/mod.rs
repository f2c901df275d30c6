//! Signing module - shared HMAC-SHA256 primitive.

mod signer;

pub use signer::{constant_time_compare, Signer};
