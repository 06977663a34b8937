//! # Smoke Check Errors
//!
//! Both failure classes surface directly to the caller; there is no retry,
//! recovery, or suppression anywhere in this crate. The two variants keep a
//! transport failure distinguishable from a wrong status code, so a failing
//! run shows whether the server was down or answered badly.

use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong during a smoke check.
#[derive(Error, Debug)]
pub enum SmokeError {
    /// The request never produced an HTTP response: connection refused,
    /// DNS failure, timeout.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered, but not with 200.
    #[error("unexpected status for {url}: expected 200 OK, got {status}")]
    UnexpectedStatus { url: String, status: StatusCode },
}

/// Convenience Result type alias that uses SmokeError as the error type.
pub type SmokeResult<T> = Result<T, SmokeError>;
