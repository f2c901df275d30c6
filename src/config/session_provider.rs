//! Session token provider configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Session token provider configuration
///
/// Covers the downstream service the capability tokens are minted for:
/// the numeric application id and the shared signing secret.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionProviderConfig {
    /// Numeric application identifier embedded in every token
    pub app_id: i64,

    /// Shared HMAC secret for token signatures
    pub server_secret: String,
}

impl SessionProviderConfig {
    /// Validate session provider configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.app_id <= 0 {
            return Err(ValidationError::InvalidAppId);
        }
        if self.server_secret.is_empty() {
            return Err(ValidationError::MissingRequired(
                "SESSION_PROVIDER__SERVER_SECRET",
            ));
        }
        if self.server_secret.len() < 16 {
            return Err(ValidationError::SecretTooShort);
        }
        Ok(())
    }
}
