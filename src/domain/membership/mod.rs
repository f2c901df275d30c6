//! Membership domain module.
//!
//! Handles the entitlement ledger: plan transitions, validity windows, and
//! lazy expiry.
//!
//! # Module Structure
//!
//! - `entitlement` - Entitlement ledger entry and its transitions
//! - `plan` - Plan subscription levels
//! - `errors` - Membership-specific errors

mod entitlement;
mod errors;
mod plan;

pub use entitlement::{Entitlement, PERIOD_DAYS};
pub use errors::MembershipError;
pub use plan::Plan;
