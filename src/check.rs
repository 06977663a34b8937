//! # HTTP Smoke Check
//!
//! Confirms that a named remote procedure is exposed and minimally functional
//! over HTTP from an external caller's perspective: one unauthenticated GET,
//! one status-code comparison. No retries, no body validation, no state
//! beyond the duration of the call.

use reqwest::{Client, StatusCode};
use tracing::{debug, info, instrument};

use crate::endpoint::ApiBase;
use crate::error::{SmokeError, SmokeResult};

/// Single-shot reachability check against a tRPC-style API.
#[derive(Debug, Clone)]
pub struct SmokeCheck {
    client: Client,
    base: ApiBase,
}

impl SmokeCheck {
    /// Creates a check with a default client: default timeouts, no custom
    /// headers, no authentication.
    pub fn new(base: ApiBase) -> Self {
        Self {
            client: Client::new(),
            base,
        }
    }

    /// Issues one GET against the procedure and returns whatever status the
    /// server answered with. Failing to get any answer at all is an error.
    #[instrument(skip(self), fields(base = self.base.as_str()))]
    pub async fn probe(&self, procedure: &str) -> SmokeResult<StatusCode> {
        let url = self.base.procedure_url(procedure);
        debug!(%url, "sending smoke request");
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        debug!(%status, "received response");
        Ok(status)
    }

    /// Passes iff the procedure answers with exactly 200 OK.
    ///
    /// Any other status comes back as [`SmokeError::UnexpectedStatus`]
    /// carrying the observed code; transport failures propagate unchanged
    /// from [`probe`](Self::probe).
    #[instrument(skip(self), fields(base = self.base.as_str()))]
    pub async fn expect_ok(&self, procedure: &str) -> SmokeResult<()> {
        let status = self.probe(procedure).await?;
        if status == StatusCode::OK {
            info!(procedure, "smoke check passed");
            Ok(())
        } else {
            Err(SmokeError::UnexpectedStatus {
                url: self.base.procedure_url(procedure),
                status,
            })
        }
    }
}
