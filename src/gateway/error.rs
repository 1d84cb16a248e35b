//! Gateway-specific error types
//!
//! Errors that can occur while issuing requests against the backend API.
//! Transport failures are passed through untranslated; envelope-level
//! error codes are left to the caller.

use thiserror::Error;

/// Errors that can occur during a gateway call
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The underlying HTTP transport failed
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success HTTP status
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status code returned by the backend
        status: u16,
        /// Raw response body, for diagnostics
        body: String,
    },

    /// The response body could not be decoded into the expected shape
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The legacy tool-type call was made without its base URL override
    #[error("legacy chat API base URL is not configured")]
    MissingLegacyBaseUrl,
}
