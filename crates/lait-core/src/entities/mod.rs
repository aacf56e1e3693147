//! Entity structs for the harness domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and machine-readable report output.

mod invoice;
mod session;
mod upload;

pub use invoice::{LineItem, SampleInvoice};
pub use session::AuthSession;
pub use upload::{UploadOutcome, UploadResult};
