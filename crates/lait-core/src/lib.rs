//! # lait-core
//!
//! Shared domain types for the LAIT seed/smoke harness:
//! - Sample invoice entities loaded from the static fixture
//! - The in-memory auth session passed to API calls
//! - Per-upload results (tagged accepted/rejected variants)
//! - Check outcomes and the run report accumulator

pub mod entities;
pub mod report;
