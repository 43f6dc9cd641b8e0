//! Azure DevOps client error types.

use thiserror::Error;

/// Errors that can occur when talking to the Azure DevOps REST API.
#[derive(Debug, Error)]
pub enum DevOpsError {
    /// Connect, TLS, or per-request timeout failure.
    #[error("devops request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("devops returned {status}: {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Response body, usually a JSON error document.
        message: String,
    },

    /// The service returned a 429 Too Many Requests response.
    #[error("devops throttled the request, retry after {retry_after_secs}s")]
    RateLimited {
        /// From `Retry-After`, 60 when absent.
        retry_after_secs: u64,
    },

    /// The personal access token is missing or was rejected.
    #[error("personal access token is missing or was rejected")]
    InvalidCredentials,

    /// A response body did not have the expected shape.
    #[error("unexpected devops response body: {0}")]
    Parse(String),
}
