//! Membership plan definitions.

use serde::{Deserialize, Serialize};

/// Paid-entitlement tier governing feature access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    /// Default plan. No expiry window.
    Free,

    /// Standard paid plan, 30-day windows.
    Pro,

    /// Top paid plan, 30-day windows. Required for end-user session tokens.
    Elite,
}

impl Plan {
    /// Returns true if this plan is a paid plan.
    pub fn is_paid(&self) -> bool {
        !matches!(self, Plan::Free)
    }

    /// Returns the display name for this plan.
    pub fn display_name(&self) -> &'static str {
        match self {
            Plan::Free => "Free",
            Plan::Pro => "Pro",
            Plan::Elite => "Elite",
        }
    }
}

impl std::fmt::Display for Plan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
