use http::header::{CONTENT_LENGTH, HOST};

use super::{documented_body, documented_headers, header_name, DocumentedBody, Snippet};
use crate::{Exchange, RestDocsConfig, RestDocsError};

/// Raw HTTP/1.1 request
pub struct HttpRequestSnippet;

/// Raw HTTP/1.1 response
pub struct HttpResponseSnippet;

fn message(
    start_line: String,
    mut headers: Vec<(String, String)>,
    body: DocumentedBody,
    config: &RestDocsConfig,
) -> String {
    let is_content_length = |name: &str| name.eq_ignore_ascii_case(CONTENT_LENGTH.as_str());

    // A reformatted body no longer matches the captured length
    if body.reformatted {
        headers.retain(|(name, _)| !is_content_length(name));
    }

    if body.len > 0
        && !config.is_excluded(CONTENT_LENGTH.as_str())
        && !headers.iter().any(|(name, _)| is_content_length(name))
    {
        headers.push((header_name(CONTENT_LENGTH.as_str()), body.len.to_string()));
    }

    let mut lines = vec![start_line];
    lines.extend(headers.into_iter().map(|(name, value)| format!("{name}: {value}")));
    lines.push(String::new());
    if !body.text.is_empty() {
        lines.push(body.text);
    }
    lines.join("\n")
}

impl Snippet for HttpRequestSnippet {
    fn name(&self) -> &'static str {
        "http-request"
    }

    fn render(&self, exchange: &Exchange, config: &RestDocsConfig) -> Result<String, RestDocsError> {
        let request = &exchange.request;
        let mut headers = documented_headers(&request.headers, config);

        if !config.is_excluded(HOST.as_str())
            && !headers
                .iter()
                .any(|(name, _)| name.eq_ignore_ascii_case(HOST.as_str()))
        {
            headers.insert(0, (header_name(HOST.as_str()), config.authority()));
        }

        let body = documented_body(&request.headers, &request.body, config)?;
        let start_line = format!("{} {} HTTP/1.1", request.method, request.path_and_query());

        Ok(config
            .format
            .code_block(Some("http"), &message(start_line, headers, body, config)))
    }
}

impl Snippet for HttpResponseSnippet {
    fn name(&self) -> &'static str {
        "http-response"
    }

    fn render(&self, exchange: &Exchange, config: &RestDocsConfig) -> Result<String, RestDocsError> {
        let response = &exchange.response;
        let headers = documented_headers(&response.headers, config);
        let body = documented_body(&response.headers, &response.body, config)?;

        let status = response.status;
        let start_line = match status.canonical_reason() {
            Some(reason) => format!("HTTP/1.1 {} {}", status.as_u16(), reason),
            None => format!("HTTP/1.1 {}", status.as_u16()),
        };

        Ok(config
            .format
            .code_block(Some("http"), &message(start_line, headers, body, config)))
    }
}
