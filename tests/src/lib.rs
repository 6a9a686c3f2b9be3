//! MediPass Sharing Test Suite
//!
//! Scenario tests across the record model and the sharing core:
//! - Share flow from selection to resolved link
//! - Grant expiry transitions
//! - Concurrent grant creation
//! - Store failures and retry behaviour

pub mod fixtures;

pub mod expiry;
pub mod concurrency;
pub mod failures;
