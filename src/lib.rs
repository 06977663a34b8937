//! # trpc-smoke - External API Smoke Check
//!
//! Probes a tRPC-style HTTP API from the outside, the way an unaffiliated
//! client would: no generated client library, no authentication, just a GET
//! to the public path of a procedure and a look at the status code. The check
//! answers one question: is the endpoint reachable and minimally functional?
//!
//! ## Modules
//!
//! - [`check`] - the smoke check itself (one GET, one status comparison)
//! - [`endpoint`] - base-URL handling and procedure URL construction
//! - [`error`] - errors distinguishing transport failures from bad status codes

pub mod check;
pub mod endpoint;
pub mod error;

pub use check::SmokeCheck;
pub use endpoint::ApiBase;
pub use error::{SmokeError, SmokeResult};
