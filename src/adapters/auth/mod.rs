//! Authentication adapters.
//!
//! Implementations of the `SessionValidator` port:
//!
//! - `jwt` - Production HS256 JWT validation
//! - `mock` - Test implementation that doesn't require signed tokens

mod jwt;
mod mock;

pub use jwt::{BearerClaims, JwtSessionValidator};
pub use mock::MockSessionValidator;
