//! Spreadsheet API client.
//!
//! Every domain is served by a single deployed script URL. Requests are
//! plain GETs with `endpoint`, `action` and action-specific query
//! parameters; every response is wrapped in the same envelope:
//!
//! ```json
//! { "success": true, "data": [ ... ] }
//! { "success": false, "error": "Sheet not found" }
//! ```
//!
//! - [`SheetsClient`] issues queries and unwraps the envelope
//! - [`ApiError`] distinguishes transport, API and decode failures

mod client;
mod envelope;
mod error;

pub use client::{DEFAULT_ACTION, SheetsClient};
pub use envelope::Envelope;
pub use error::{ApiError, UNKNOWN_API_ERROR};
