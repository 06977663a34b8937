//! # Endpoint URL Construction
//!
//! tRPC exposes every procedure at a predictable URL path derived from its
//! name: `{base}/trpc/{router}.{procedure}`. This module holds the base-URL
//! handling and the join logic, so the rest of the crate never concatenates
//! URL strings by hand.

use std::env;

/// Base URL of the local development server, up to and including the `/api`
/// prefix where the framework serves its routes.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// Path under the base where the tRPC handler is mounted.
pub const TRPC_MOUNT: &str = "/trpc";

/// Environment variable that overrides the base URL.
pub const BASE_URL_ENV: &str = "SMOKE_BASE_URL";

/// The `getAll` procedure of the `task` router. Procedures are named
/// `router.procedure`, matching the path segment tRPC serves them under.
pub const TASK_GET_ALL: &str = "task.getAll";

/// Base URL of the API under test.
///
/// Stored without a trailing slash so joining a mount path never produces
/// a `//` in the composed URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase(String);

impl ApiBase {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self(base)
    }

    /// The hardcoded local development default, [`DEFAULT_BASE_URL`].
    pub fn default_local() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }

    /// Reads the base URL from `SMOKE_BASE_URL`, falling back to
    /// [`DEFAULT_BASE_URL`] when unset.
    pub fn from_env() -> Self {
        match env::var(BASE_URL_ENV) {
            Ok(base) => Self::new(base),
            Err(_) => Self::default_local(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Full URL of a tRPC procedure.
    ///
    /// `task.getAll` against the default base composes to
    /// `http://localhost:3000/api/trpc/task.getAll`.
    pub fn procedure_url(&self, procedure: &str) -> String {
        format!("{}{}/{}", self.0, TRPC_MOUNT, procedure)
    }
}

impl Default for ApiBase {
    fn default() -> Self {
        Self::default_local()
    }
}
