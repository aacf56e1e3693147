//! # lait-smoke
//!
//! The seed/smoke pipeline over the LAIT API:
//! 1. Health probe (fail-fast)
//! 2. Auth: register the demo account, falling back to login on conflict
//! 3. Upload driver: continue-on-error batch over the fixture invoices
//! 4. Verification checks: invoice list and dashboard metric predicates
//! 5. Report assembly
//!
//! Stages run against the [`api::InvoiceApi`] trait so the whole pipeline
//! is unit-testable with an in-memory fake and zero network.

pub mod api;
pub mod auth;
pub mod pipeline;
pub mod upload;
pub mod verify;

pub use api::InvoiceApi;
pub use pipeline::{Mode, run};
