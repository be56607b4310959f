//! Typed errors for the data-access layer.

use reqwest::StatusCode;
use thiserror::Error;

/// Failures of a single store call.
///
/// Connection problems, auth rejections, malformed queries, and missing
/// tables all surface here; callers decide whether to degrade (read paths)
/// or fail loud (write paths).
#[derive(Debug, Error)]
pub enum StoreError {
    /// Connection, timeout, or body-decode failure in the HTTP client.
    #[error("database request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("database returned {status}: {body}")]
    Api { status: StatusCode, body: String },

    /// The configured endpoint is not a usable URL.
    #[error("invalid database endpoint: {0}")]
    InvalidEndpoint(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_includes_status_and_body() {
        let err = StoreError::Api {
            status: StatusCode::UNAUTHORIZED,
            body: "Invalid API key".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("401"));
        assert!(msg.contains("Invalid API key"));
    }
}
