//! JWT session validator.
//!
//! Validates locally-issued HS256 bearer tokens and resolves the caller
//! from the `sub` and `role` claims.

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, Caller, CallerRole, UserId};
use crate::ports::SessionValidator;

/// Claims carried in the bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BearerClaims {
    /// Subject: the caller's user id.
    pub sub: String,
    /// Role claim; absent means ordinary user.
    #[serde(default)]
    pub role: Option<CallerRole>,
    /// Expiry as unix seconds.
    pub exp: i64,
}

/// Session validator over HS256-signed JWTs.
pub struct JwtSessionValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtSessionValidator {
    /// Creates a validator over the shared signing secret.
    pub fn new(secret: &SecretString) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.expose_secret().as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<Caller, AuthError> {
        let data = decode::<BearerClaims>(token, &self.decoding_key, &self.validation).map_err(
            |err| match err.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            },
        )?;

        let user_id = UserId::new(data.claims.sub).map_err(|_| AuthError::InvalidToken)?;
        let role = data.claims.role.unwrap_or(CallerRole::User);
        Ok(role.into_caller(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "jwt-test-secret";

    fn validator() -> JwtSessionValidator {
        JwtSessionValidator::new(&SecretString::new(SECRET.to_string()))
    }

    fn token(claims: &BearerClaims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn future_exp() -> i64 {
        chrono::Utc::now().timestamp() + 3600
    }

    #[tokio::test]
    async fn valid_user_token_resolves_user_caller() {
        let claims = BearerClaims {
            sub: "user-1".to_string(),
            role: Some(CallerRole::User),
            exp: future_exp(),
        };

        let caller = validator().validate(&token(&claims, SECRET)).await.unwrap();
        assert_eq!(caller.user_id().as_str(), "user-1");
        assert!(!caller.is_admin());
    }

    #[tokio::test]
    async fn admin_role_claim_resolves_admin_caller() {
        let claims = BearerClaims {
            sub: "ops-1".to_string(),
            role: Some(CallerRole::Admin),
            exp: future_exp(),
        };

        let caller = validator().validate(&token(&claims, SECRET)).await.unwrap();
        assert!(caller.is_admin());
    }

    #[tokio::test]
    async fn missing_role_claim_defaults_to_user() {
        let claims = BearerClaims {
            sub: "user-1".to_string(),
            role: None,
            exp: future_exp(),
        };

        let caller = validator().validate(&token(&claims, SECRET)).await.unwrap();
        assert!(!caller.is_admin());
    }

    #[tokio::test]
    async fn expired_token_is_rejected_as_expired() {
        let claims = BearerClaims {
            sub: "user-1".to_string(),
            role: None,
            exp: chrono::Utc::now().timestamp() - 3600,
        };

        let err = validator()
            .validate(&token(&claims, SECRET))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::TokenExpired));
    }

    #[tokio::test]
    async fn token_signed_with_other_secret_is_rejected() {
        let claims = BearerClaims {
            sub: "user-1".to_string(),
            role: None,
            exp: future_exp(),
        };

        let err = validator()
            .validate(&token(&claims, "wrong-secret"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn garbage_token_is_rejected() {
        let err = validator().validate("not-a-jwt").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn empty_subject_is_rejected() {
        let claims = BearerClaims {
            sub: String::new(),
            role: None,
            exp: future_exp(),
        };

        let err = validator()
            .validate(&token(&claims, SECRET))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken));
    }
}
