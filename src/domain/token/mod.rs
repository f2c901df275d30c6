//! Token module - capability token bodies, wire encoding, and issuance.

mod body;
mod issuer;

pub use body::{SessionToken, SignedToken, TokenBody};
pub use issuer::{TokenIssuer, DEFAULT_TTL_SECONDS};
