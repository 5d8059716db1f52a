//! Error types for the restdocs library

use http::{Method, StatusCode, Uri};
use thiserror::Error;

/// Boxed error used at the service and body boundaries
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while verifying or documenting an exchange
#[derive(Error, Debug)]
pub enum RestDocsError {
    /// The response status did not match the expectation
    #[error("{method} {uri}: expected status {expected} but was {actual}")]
    UnexpectedStatus {
        method: Method,
        uri: Uri,
        expected: StatusCode,
        actual: StatusCode,
    },

    /// The request could not be built
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] http::Error),

    /// The service under test returned an error instead of a response
    #[error("Service call failed: {0}")]
    Service(String),

    /// A request or response body could not be buffered
    #[error("Failed to read body: {0}")]
    Body(String),

    /// The snippet identifier cannot be used as an output directory
    #[error("Invalid snippet identifier: {0}")]
    InvalidIdentifier(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Snippet file could not be written
    #[error("Failed to write snippet: {0}")]
    Io(#[from] std::io::Error),

    /// JSON body could not be re-serialized
    #[error("Failed to format body: {0}")]
    Json(#[from] serde_json::Error),
}

impl RestDocsError {
    /// Returns true when the error is a failed status expectation
    pub fn is_unexpected_status(&self) -> bool {
        matches!(self, RestDocsError::UnexpectedStatus { .. })
    }
}
