//! FitLive - Membership and Session Token Service
//!
//! This crate implements the entitlement ledger, payment verification, and
//! capability token issuance behind the live-class platform.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
