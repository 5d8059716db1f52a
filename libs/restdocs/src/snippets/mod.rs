//! Snippet implementations
//!
//! Each snippet renders one view of an [`Exchange`] and is written to
//! `<output_dir>/<identifier>/<name>.<ext>`.

mod body;
mod curl;
mod http_message;
mod httpie;

pub use body::{RequestBodySnippet, ResponseBodySnippet};
pub use curl::CurlRequestSnippet;
pub use http_message::{HttpRequestSnippet, HttpResponseSnippet};
pub use httpie::HttpieRequestSnippet;

use std::sync::Arc;

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::HeaderMap;

use crate::exchange::body_text;
use crate::{Exchange, RestDocsConfig, RestDocsError};

/// Trait for documentation snippets
pub trait Snippet: Send + Sync {
    /// File stem of the snippet, e.g. `curl-request`
    fn name(&self) -> &'static str;

    /// Render the snippet in the configured format
    fn render(&self, exchange: &Exchange, config: &RestDocsConfig) -> Result<String, RestDocsError>;
}

/// Snippets written for every documented exchange unless overridden
pub fn default_snippets() -> Vec<Arc<dyn Snippet>> {
    vec![
        Arc::new(CurlRequestSnippet),
        Arc::new(HttpieRequestSnippet),
        Arc::new(HttpRequestSnippet),
        Arc::new(HttpResponseSnippet),
        Arc::new(RequestBodySnippet),
        Arc::new(ResponseBodySnippet),
    ]
}

/// Canonical header casing: `content-type` -> `Content-Type`
pub(crate) fn header_name(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

/// Headers in insertion order, excluded names removed
pub(crate) fn documented_headers(headers: &HeaderMap, config: &RestDocsConfig) -> Vec<(String, String)> {
    headers
        .iter()
        .filter(|(name, _)| !config.is_excluded(name.as_str()))
        .map(|(name, value)| {
            (
                header_name(name.as_str()),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect()
}

/// Body as it appears in a snippet
pub(crate) struct DocumentedBody {
    pub text: String,
    /// Byte length of the documented body
    pub len: usize,
    /// Whether `text` differs from the captured bytes
    pub reformatted: bool,
}

/// Body text, re-indented when it is JSON and pretty printing is enabled
pub(crate) fn documented_body(
    headers: &HeaderMap,
    body: &Bytes,
    config: &RestDocsConfig,
) -> Result<DocumentedBody, RestDocsError> {
    let is_json = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("json"))
        .unwrap_or(false);

    if config.pretty_print && is_json && !body.is_empty() {
        match serde_json::from_slice::<serde_json::Value>(body) {
            Ok(value) => {
                let text = serde_json::to_string_pretty(&value)?;
                return Ok(DocumentedBody {
                    len: text.len(),
                    reformatted: true,
                    text,
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "body declared as JSON could not be parsed, keeping it verbatim");
            }
        }
    }

    Ok(DocumentedBody {
        text: body_text(body),
        len: body.len(),
        reformatted: false,
    })
}

pub(crate) fn formatted_body(
    headers: &HeaderMap,
    body: &Bytes,
    config: &RestDocsConfig,
) -> Result<String, RestDocsError> {
    Ok(documented_body(headers, body, config)?.text)
}

/// Quote a value for a POSIX shell
pub(crate) fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}
