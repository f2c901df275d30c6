//! Entitlement ledger entry.
//!
//! One entry per user, created implicitly at first write and never deleted.
//! Expiry is lazy: nothing sweeps lapsed entries, so every read goes through
//! the single [`Entitlement::is_active`] predicate rather than comparing
//! `valid_till` ad hoc.
//!
//! # Invariants
//!
//! - Paid plans always carry `valid_till`, and `valid_till > since`
//! - `Free` never carries `valid_till`
//! - No transition decreases `valid_till` below now
//! - Transitions either fully apply or leave the entry untouched

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId};

use super::errors::MembershipError;
use super::plan::Plan;

/// Paid window granted per successful payment or renewal.
pub const PERIOD_DAYS: i64 = 30;

/// A user's membership plan and validity window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entitlement {
    /// Owner of this entry.
    pub user_id: UserId,

    /// Current plan.
    pub plan: Plan,

    /// When the current plan took effect.
    pub since: Timestamp,

    /// End of the paid window; `None` exactly when the plan is free.
    pub valid_till: Option<Timestamp>,

    /// Optimistic concurrency version of the persisted entry.
    pub version: u64,
}

impl Entitlement {
    /// Default free entry, as created implicitly at first write.
    pub fn new_free(user_id: UserId) -> Self {
        Self {
            user_id,
            plan: Plan::Free,
            since: Timestamp::now(),
            valid_till: None,
            version: 0,
        }
    }

    /// The one is-active predicate.
    ///
    /// Free is always active (as free); a paid plan is active only while
    /// `now <= valid_till`.
    pub fn is_active(&self, now: Timestamp) -> bool {
        match self.valid_till {
            None => true,
            Some(till) => now <= till,
        }
    }

    /// The plan currently in effect: the stored plan while active, `Free`
    /// once the window has lapsed.
    pub fn effective_plan(&self, now: Timestamp) -> Plan {
        if self.is_active(now) {
            self.plan
        } else {
            Plan::Free
        }
    }

    /// Returns true if the caller currently holds an active paid plan.
    pub fn has_active_paid_plan(&self, now: Timestamp) -> bool {
        self.plan.is_paid() && self.is_active(now)
    }

    /// Upgrade to a paid plan: fresh 30-day window from now.
    ///
    /// Used by both the payment path (after signature verification) and the
    /// admin override. No proration, no partial-period carryover.
    ///
    /// # Errors
    ///
    /// Rejects `Free` as a target plan; the entry is left unchanged.
    pub fn upgrade(&mut self, plan: Plan, now: Timestamp) -> Result<(), MembershipError> {
        if !plan.is_paid() {
            return Err(MembershipError::invalid_plan(
                "upgrade target must be a paid plan",
            ));
        }

        self.plan = plan;
        self.since = now;
        self.valid_till = Some(now.add_days(PERIOD_DAYS));
        Ok(())
    }

    /// Renew: extend the window by 30 days from its current end, or from now
    /// if already lapsed. Renewing early never loses remaining time.
    ///
    /// A free entry being renewed defaults to `Pro`.
    pub fn renew(&mut self, now: Timestamp) {
        let base = match self.valid_till {
            Some(till) if till.is_after(&now) => till,
            _ => now,
        };

        if !self.plan.is_paid() {
            self.plan = Plan::Pro;
            self.since = now;
        }
        self.valid_till = Some(base.add_days(PERIOD_DAYS));
    }

    /// Voluntary downgrade to free. Irreversible from the ledger's point of
    /// view; idempotent when already free.
    pub fn downgrade(&mut self, now: Timestamp) {
        if self.plan == Plan::Free {
            return;
        }

        self.plan = Plan::Free;
        self.since = now;
        self.valid_till = None;
    }
}
