//! Session token body and wire encoding.
//!
//! The signed-body field order is a fixed contract, not an accident of any
//! object representation: the external session provider reproduces the JSON
//! byte-for-byte to validate the signature. The struct field order below IS
//! the wire order — do not reorder fields.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Unsigned token body. Immutable once constructed.
///
/// Serialized field order: `app_id, user_id, nonce, ctime, expire, payload`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBody {
    /// Issuing application identifier, constant per process.
    pub app_id: i64,

    /// Identity the token authorizes.
    pub user_id: String,

    /// Anti-collision nonce; uniqueness, not secrecy.
    pub nonce: i64,

    /// Creation time, Unix seconds.
    pub ctime: i64,

    /// Expiry time, Unix seconds. Always greater than `ctime`.
    pub expire: i64,

    /// Opaque payload, passed through unmodified.
    pub payload: String,
}

impl TokenBody {
    /// Returns the canonical byte serialization the signature covers.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        serde_json::to_vec(self).expect("token body serialization cannot fail")
    }
}

/// Token body plus its signature, in wire field order.
///
/// `signature` is the lowercase hex HMAC-SHA256 of the JSON encoding of the
/// body fields alone (same key order, signature excluded).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedToken {
    pub app_id: i64,
    pub user_id: String,
    pub nonce: i64,
    pub ctime: i64,
    pub expire: i64,
    pub payload: String,
    pub signature: String,
}

impl SignedToken {
    /// Combines a body with its signature.
    pub fn new(body: TokenBody, signature: String) -> Self {
        Self {
            app_id: body.app_id,
            user_id: body.user_id,
            nonce: body.nonce,
            ctime: body.ctime,
            expire: body.expire,
            payload: body.payload,
            signature,
        }
    }

    /// Returns the body fields, without the signature.
    pub fn body(&self) -> TokenBody {
        TokenBody {
            app_id: self.app_id,
            user_id: self.user_id.clone(),
            nonce: self.nonce,
            ctime: self.ctime,
            expire: self.expire,
            payload: self.payload.clone(),
        }
    }

    /// Encodes the signed structure as the opaque bearer string.
    pub fn encode(&self) -> SessionToken {
        let json = serde_json::to_vec(self).expect("signed token serialization cannot fail");
        SessionToken(BASE64.encode(json))
    }
}

/// Opaque bearer token handed to callers.
///
/// Possession alone authorizes joining one session; the external provider
/// validates the embedded signature. This type never inspects validity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Returns the opaque string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes the embedded signed structure.
    ///
    /// For diagnostics and tests only: cryptographic verification is the
    /// session provider's job, not this crate's.
    pub fn decode(&self) -> Result<SignedToken, ValidationError> {
        let json = BASE64
            .decode(&self.0)
            .map_err(|e| ValidationError::invalid_format("token", e.to_string()))?;
        serde_json::from_slice(&json)
            .map_err(|e| ValidationError::invalid_format("token", e.to_string()))
    }
}

impl std::fmt::Display for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
