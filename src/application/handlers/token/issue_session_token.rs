//! IssueSessionTokenHandler - Command handler for minting capability tokens.

use std::sync::Arc;

use crate::domain::foundation::{Caller, Timestamp};
use crate::domain::membership::{Entitlement, MembershipError, Plan};
use crate::domain::token::{SessionToken, TokenIssuer};
use crate::ports::EntitlementStore;

/// Command to mint a session token for a downstream service.
#[derive(Debug, Clone)]
pub struct IssueSessionTokenCommand {
    /// Authenticated caller.
    pub caller: Caller,
    /// Subject the token is minted for.
    pub subject_id: String,
    /// Token lifetime; the issuer default applies when absent.
    pub ttl_seconds: Option<i64>,
    /// Opaque payload embedded verbatim in the token body.
    pub payload: Option<String>,
}

/// Handler for session token issuance.
///
/// Admins may mint tokens for any subject. Ordinary users may mint only
/// for themselves, and only while holding an active Elite plan.
pub struct IssueSessionTokenHandler {
    issuer: TokenIssuer,
    store: Arc<dyn EntitlementStore>,
}

impl IssueSessionTokenHandler {
    pub fn new(issuer: TokenIssuer, store: Arc<dyn EntitlementStore>) -> Self {
        Self { issuer, store }
    }

    pub async fn handle(
        &self,
        cmd: IssueSessionTokenCommand,
    ) -> Result<SessionToken, MembershipError> {
        if !cmd.caller.is_admin() {
            self.authorize_user(&cmd).await?;
        }

        let token = self
            .issuer
            .issue(&cmd.subject_id, cmd.ttl_seconds, cmd.payload)?;

        tracing::debug!(
            caller_id = %cmd.caller.user_id(),
            subject_id = %cmd.subject_id,
            "session token issued"
        );
        Ok(token)
    }

    async fn authorize_user(&self, cmd: &IssueSessionTokenCommand) -> Result<(), MembershipError> {
        if cmd.caller.user_id().as_str() != cmd.subject_id {
            return Err(MembershipError::forbidden(
                "users may only request tokens for themselves",
            ));
        }

        let now = Timestamp::now();
        let entry = self
            .store
            .find(cmd.caller.user_id())
            .await?
            .unwrap_or_else(|| Entitlement::new_free(cmd.caller.user_id().clone()));

        if entry.effective_plan(now) != Plan::Elite {
            return Err(MembershipError::forbidden(
                "session tokens require an active Elite plan",
            ));
        }
        Ok(())
    }
}
