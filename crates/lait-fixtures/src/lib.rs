//! # lait-fixtures
//!
//! The static sample-invoice dataset that drives the seeder, plus the
//! flat-text rendering submitted to the upload endpoint.
//!
//! The fixture is ten legal invoices embedded as JSON at compile time. Its
//! grand total is $137,005 -- the expected dashboard spend after a full
//! seed run against a fresh backend.

mod render;

pub use render::{file_name, flat_text};

use lait_core::entities::SampleInvoice;

const SAMPLE_INVOICES_JSON: &str = include_str!("../fixtures/sample_invoices.json");

/// Number of invoices in the fixture.
pub const SAMPLE_COUNT: usize = 10;

/// Grand total of all fixture line amounts, in dollars.
pub const EXPECTED_TOTAL_SPEND: f64 = 137_005.0;

/// Parse the embedded fixture, in fixture order.
///
/// # Panics
///
/// Panics if the embedded JSON is malformed; the fixture is compiled into
/// the binary, so this is a build artifact defect rather than a runtime
/// condition.
#[must_use]
pub fn sample_invoices() -> Vec<SampleInvoice> {
    serde_json::from_str(SAMPLE_INVOICES_JSON).expect("embedded fixture should parse")
}
