use thiserror::Error;

/// Failures surfaced by [`crate::ApiClient`] operations.
///
/// Every operation is fallible and callers propagate rather than guessing
/// success. Malformed response bodies are NOT an error; they decode as
/// absence-of-value.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("{path} failed: {status}")]
    Status { path: String, status: u16 },

    /// The request hit the per-request timeout and was aborted.
    #[error("{path} failed: request timed out")]
    Timeout { path: String },

    /// The request never produced a response (DNS, connect, TLS, ...).
    #[error("{path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Init(#[source] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_display() {
        let err = ApiError::Status {
            path: "/insights".to_string(),
            status: 503,
        };
        assert_eq!(err.to_string(), "/insights failed: 503");
    }

    #[test]
    fn timeout_error_display() {
        let err = ApiError::Timeout {
            path: "/search".to_string(),
        };
        assert_eq!(err.to_string(), "/search failed: request timed out");
    }
}
