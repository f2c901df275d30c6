//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `EntitlementStore` - Entitlement ledger persistence with CAS writes
//! - `SessionValidator` - Bearer credential validation

mod entitlement_store;
mod session_validator;

pub use entitlement_store::EntitlementStore;
pub use session_validator::SessionValidator;
