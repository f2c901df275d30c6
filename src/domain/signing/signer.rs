//! HMAC-SHA256 signing primitive.
//!
//! The signer is the single cryptographic building block shared by token
//! issuance and payment verification: a deterministic keyed hash over an
//! exact byte serialization. It holds the shared secret and nothing else.
//!
//! # Security
//!
//! - Secrets are wrapped in `secrecy::SecretString` so they never appear in
//!   debug output.
//! - Signature comparison uses constant-time equality via `subtle`.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::domain::foundation::ValidationError;

type HmacSha256 = Hmac<Sha256>;

/// Stateless HMAC-SHA256 signer over a process-wide shared secret.
///
/// The secret is loaded once at startup and never rotated at runtime.
#[derive(Clone)]
pub struct Signer {
    secret: SecretString,
}

impl Signer {
    /// Creates a signer from a shared secret.
    ///
    /// # Errors
    ///
    /// An empty secret is a configuration error and is rejected here, at
    /// startup, rather than at call time.
    pub fn new(secret: impl Into<String>) -> Result<Self, ValidationError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ValidationError::empty_field("shared_secret"));
        }
        Ok(Self {
            secret: SecretString::new(secret),
        })
    }

    /// Computes the HMAC-SHA256 signature over the given bytes.
    ///
    /// Deterministic; cannot fail for well-formed inputs.
    pub fn sign(&self, message: &[u8]) -> Vec<u8> {
        let mut mac = HmacSha256::new_from_slice(self.secret.expose_secret().as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(message);
        mac.finalize().into_bytes().to_vec()
    }

    /// Computes the signature and encodes it as lowercase hex.
    pub fn sign_hex(&self, message: &[u8]) -> String {
        hex::encode(self.sign(message))
    }

    /// Verifies a signature over the given bytes in constant time.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        constant_time_compare(&self.sign(message), signature)
    }
}

/// Performs constant-time comparison of two byte slices.
///
/// Unequal lengths return false without leaking where the mismatch is.
pub fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
