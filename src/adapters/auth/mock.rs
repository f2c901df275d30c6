//! Mock authentication adapter for testing.
//!
//! Implements the `SessionValidator` port for use in tests, avoiding the
//! need for real signed tokens.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, Caller, UserId};
use crate::ports::SessionValidator;

/// Mock session validator for testing.
///
/// Stores a map of tokens to callers. Tokens not in the map return `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    /// Map of valid tokens to their resolved callers
    tokens: RwLock<HashMap<String, Caller>>,
    /// Optional error to return for all validations (for error testing)
    force_error: RwLock<Option<AuthError>>,
}

impl MockSessionValidator {
    /// Creates a new empty mock validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid token that resolves to a caller.
    pub fn with_caller(self, token: impl Into<String>, caller: Caller) -> Self {
        self.tokens.write().unwrap().insert(token.into(), caller);
        self
    }

    /// Adds a valid token for an ordinary user with the given ID.
    pub fn with_user(self, token: impl Into<String>, user_id: impl Into<String>) -> Self {
        let caller = Caller::User(UserId::new(user_id.into()).unwrap());
        self.with_caller(token, caller)
    }

    /// Adds a valid token for an admin with the given ID.
    pub fn with_admin(self, token: impl Into<String>, user_id: impl Into<String>) -> Self {
        let caller = Caller::Admin(UserId::new(user_id.into()).unwrap());
        self.with_caller(token, caller)
    }

    /// Forces all validations to return the specified error.
    pub fn with_error(self, error: AuthError) -> Self {
        *self.force_error.write().unwrap() = Some(error);
        self
    }

    /// Clears the forced error and returns to normal operation.
    pub fn clear_error(&self) {
        *self.force_error.write().unwrap() = None;
    }

    /// Registers a new valid token at runtime.
    pub fn add_token(&self, token: impl Into<String>, caller: Caller) {
        self.tokens.write().unwrap().insert(token.into(), caller);
    }

    /// Removes a token, making it invalid.
    pub fn remove_token(&self, token: &str) {
        self.tokens.write().unwrap().remove(token);
    }

    /// Returns the number of registered valid tokens.
    pub fn token_count(&self) -> usize {
        self.tokens.read().unwrap().len()
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<Caller, AuthError> {
        if let Some(error) = self.force_error.read().unwrap().clone() {
            return Err(error);
        }

        self.tokens
            .read()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}
