//! Capability token issuance.
//!
//! Pure and stateless: no issued-token record is kept, so a token cannot be
//! revoked before its natural expiry. If revocation is ever required, a
//! short-lived denylist keyed by nonce at the external verifier is the
//! intended extension point.

use rand::Rng;

use crate::domain::foundation::{Timestamp, ValidationError};
use crate::domain::signing::Signer;

use super::body::{SessionToken, SignedToken, TokenBody};

/// Default token lifetime when the caller does not supply one.
pub const DEFAULT_TTL_SECONDS: i64 = 86_400;

/// Mints signed session tokens for the external media provider.
///
/// Safe to share across tasks: the only state is the app id and the
/// immutable signing secret. Nonces come from a per-thread random source, so
/// concurrent issuance never races on a shared counter.
#[derive(Clone)]
pub struct TokenIssuer {
    app_id: i64,
    signer: Signer,
}

impl TokenIssuer {
    /// Creates an issuer for the given application id and signing secret.
    pub fn new(app_id: i64, signer: Signer) -> Self {
        Self { app_id, signer }
    }

    /// Issues a signed session token for `subject_id`.
    ///
    /// `ttl_seconds` defaults to [`DEFAULT_TTL_SECONDS`] and must be
    /// positive. `payload` is carried through opaque and unmodified.
    ///
    /// Two calls with identical inputs at the same instant still differ:
    /// each token carries a fresh nonce.
    ///
    /// # Errors
    ///
    /// Rejects an empty subject, a non-positive ttl, or a ttl so large the
    /// expiry would not fit in an `i64`, before any cryptographic work is
    /// done.
    pub fn issue(
        &self,
        subject_id: &str,
        ttl_seconds: Option<i64>,
        payload: Option<String>,
    ) -> Result<SessionToken, ValidationError> {
        if subject_id.is_empty() {
            return Err(ValidationError::empty_field("subject_id"));
        }

        let ttl = ttl_seconds.unwrap_or(DEFAULT_TTL_SECONDS);
        if ttl <= 0 {
            return Err(ValidationError::not_positive("ttl_seconds", ttl));
        }

        let ctime = Timestamp::now().as_unix_secs();
        let expire = ctime.checked_add(ttl).ok_or_else(|| {
            ValidationError::invalid_format("ttl_seconds", "expiry exceeds representable time")
        })?;
        let body = TokenBody {
            app_id: self.app_id,
            user_id: subject_id.to_string(),
            nonce: fresh_nonce(),
            ctime,
            expire,
            payload: payload.unwrap_or_default(),
        };

        let signature = self.signer.sign_hex(&body.canonical_bytes());

        tracing::debug!(
            subject_id,
            ttl_seconds = ttl,
            "Issued session token"
        );

        Ok(SignedToken::new(body, signature).encode())
    }
}

/// Draws a nonce uniformly from the non-negative 31-bit range.
fn fresh_nonce() -> i64 {
    i64::from(rand::thread_rng().gen_range(0..=i32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "token-signing-secret";
    const TEST_APP_ID: i64 = 1017;

    fn test_issuer() -> TokenIssuer {
        TokenIssuer::new(TEST_APP_ID, Signer::new(TEST_SECRET).unwrap())
    }

    #[test]
    fn issue_rejects_empty_subject() {
        let result = test_issuer().issue("", None, None);
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn issue_rejects_zero_ttl() {
        let result = test_issuer().issue("user-1", Some(0), None);
        assert!(matches!(result, Err(ValidationError::NotPositive { .. })));
    }

    #[test]
    fn issue_rejects_negative_ttl() {
        let result = test_issuer().issue("user-1", Some(-60), None);
        assert!(matches!(result, Err(ValidationError::NotPositive { .. })));
    }

    #[test]
    fn issue_rejects_ttl_whose_expiry_cannot_be_represented() {
        let result = test_issuer().issue("user-1", Some(i64::MAX), None);
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn issued_token_embeds_requested_ttl() {
        let token = test_issuer().issue("user-1", Some(3600), None).unwrap();
        let signed = token.decode().unwrap();
        assert_eq!(signed.expire - signed.ctime, 3600);
    }

    #[test]
    fn issued_token_defaults_ttl_to_one_day() {
        let token = test_issuer().issue("user-1", None, None).unwrap();
        let signed = token.decode().unwrap();
        assert_eq!(signed.expire - signed.ctime, DEFAULT_TTL_SECONDS);
    }

    #[test]
    fn issued_token_carries_subject_and_app_id() {
        let token = test_issuer().issue("user-42", None, None).unwrap();
        let signed = token.decode().unwrap();
        assert_eq!(signed.user_id, "user-42");
        assert_eq!(signed.app_id, TEST_APP_ID);
    }

    #[test]
    fn issued_token_passes_payload_through_unmodified() {
        let token = test_issuer()
            .issue("user-1", None, Some("room=alpha".to_string()))
            .unwrap();
        assert_eq!(token.decode().unwrap().payload, "room=alpha");
    }

    #[test]
    fn payload_defaults_to_empty_string() {
        let token = test_issuer().issue("user-1", None, None).unwrap();
        assert_eq!(token.decode().unwrap().payload, "");
    }

    #[test]
    fn embedded_signature_rederives_from_embedded_body() {
        let token = test_issuer().issue("user-1", Some(600), None).unwrap();
        let signed = token.decode().unwrap();

        let signer = Signer::new(TEST_SECRET).unwrap();
        let expected = signer.sign_hex(&signed.body().canonical_bytes());
        assert_eq!(signed.signature, expected);
    }

    #[test]
    fn signature_does_not_rederive_with_wrong_secret() {
        let token = test_issuer().issue("user-1", Some(600), None).unwrap();
        let signed = token.decode().unwrap();

        let wrong = Signer::new("some-other-secret").unwrap();
        assert_ne!(signed.signature, wrong.sign_hex(&signed.body().canonical_bytes()));
    }

    #[test]
    fn same_second_issuance_produces_distinct_tokens() {
        let issuer = test_issuer();
        // Same subject, same ttl, back to back: nonce must differentiate.
        let a = issuer.issue("user-1", Some(3600), None).unwrap();
        let b = issuer.issue("user-1", Some(3600), None).unwrap();
        assert_ne!(a, b);
        assert_ne!(a.decode().unwrap().nonce, b.decode().unwrap().nonce);
    }

    #[test]
    fn nonce_stays_in_31_bit_range() {
        let issuer = test_issuer();
        for _ in 0..64 {
            let nonce = issuer
                .issue("user-1", None, None)
                .unwrap()
                .decode()
                .unwrap()
                .nonce;
            assert!((0..=i64::from(i32::MAX)).contains(&nonce));
        }
    }

    #[test]
    fn expire_is_always_after_ctime() {
        let token = test_issuer().issue("user-1", Some(1), None).unwrap();
        let signed = token.decode().unwrap();
        assert!(signed.expire > signed.ctime);
    }
}
