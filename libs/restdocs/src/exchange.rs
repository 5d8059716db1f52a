//! Captured request/response pairs

use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode, Uri, Version};

/// Request as it was sent to the service under test
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: Method,
    pub uri: Uri,
    pub version: Version,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl CapturedRequest {
    /// Path plus query string, `/` when the URI has neither
    pub fn path_and_query(&self) -> &str {
        self.uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/")
    }
}

/// Response as it was returned by the service under test
#[derive(Debug, Clone)]
pub struct CapturedResponse {
    pub status: StatusCode,
    pub version: Version,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// One verified request/response pair
#[derive(Debug, Clone)]
pub struct Exchange {
    pub request: CapturedRequest,
    pub response: CapturedResponse,
}

/// Body as text, replacing invalid UTF-8 sequences
pub(crate) fn body_text(body: &Bytes) -> String {
    String::from_utf8_lossy(body).into_owned()
}
