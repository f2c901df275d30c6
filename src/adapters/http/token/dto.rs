//! HTTP DTOs for session token endpoints.

use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to mint a session token.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueTokenRequest {
    /// Subject the token is minted for; defaults to the caller.
    #[serde(default)]
    pub subject_id: Option<String>,
    /// Token lifetime in seconds; the issuer default applies when absent.
    #[serde(default)]
    pub ttl_seconds: Option<i64>,
    /// Opaque payload embedded verbatim in the token body.
    #[serde(default)]
    pub payload: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response carrying a freshly minted session token.
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    /// Base64-encoded signed token.
    pub token: String,
}
