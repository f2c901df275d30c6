//! In-memory adapters.
//!
//! Process-local implementations of persistence ports. Used in production
//! single-instance deployments and throughout the test suite.

mod in_memory_entitlement_store;

pub use in_memory_entitlement_store::InMemoryEntitlementStore;
