//! Authentication configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Authentication configuration (bearer token validation)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// Shared secret for HS256 bearer token validation
    pub jwt_secret: String,
}

impl AuthConfig {
    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.jwt_secret.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"));
        }
        if self.jwt_secret.len() < 16 {
            return Err(ValidationError::SecretTooShort);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_missing_secret() {
        let config = AuthConfig::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_short_secret() {
        let config = AuthConfig {
            jwt_secret: "short".to_string(),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::SecretTooShort)
        ));
    }

    #[test]
    fn test_validation_valid_secret() {
        let config = AuthConfig {
            jwt_secret: "a-sufficiently-long-secret".to_string(),
        };
        assert!(config.validate().is_ok());
    }
}
