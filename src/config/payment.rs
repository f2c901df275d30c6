//! Payment configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Payment configuration (external gateway)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentConfig {
    /// Shared secret the gateway signs confirmations with
    pub gateway_secret: String,
}

impl PaymentConfig {
    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.gateway_secret.is_empty() {
            return Err(ValidationError::MissingRequired("PAYMENT__GATEWAY_SECRET"));
        }
        if self.gateway_secret.len() < 16 {
            return Err(ValidationError::SecretTooShort);
        }
        Ok(())
    }
}
