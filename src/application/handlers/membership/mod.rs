//! Membership handlers.
//!
//! Command and query handlers for the entitlement ledger:
//!
//! ## Commands
//! - Confirming a gateway payment (upgrade-via-payment)
//! - Admin override upgrade
//! - Admin renewal
//! - Voluntary downgrade
//!
//! ## Queries
//! - Get membership details

mod confirm_payment;
mod downgrade_membership;
mod get_membership;
mod override_upgrade;
mod renew_membership;

/// Bounded retries for the read-modify-commit loop on version conflicts.
pub(crate) const MAX_COMMIT_ATTEMPTS: usize = 3;

// Commands
pub use confirm_payment::{ConfirmPaymentCommand, ConfirmPaymentHandler};
pub use downgrade_membership::{DowngradeMembershipCommand, DowngradeMembershipHandler};
pub use override_upgrade::{OverrideUpgradeCommand, OverrideUpgradeHandler};
pub use renew_membership::{RenewMembershipCommand, RenewMembershipHandler};

// Queries
pub use get_membership::{GetMembershipHandler, GetMembershipQuery, MembershipView};
