use http::header::{CONTENT_LENGTH, HOST};

use super::{documented_headers, formatted_body, shell_quote, Snippet};
use crate::{Exchange, RestDocsConfig, RestDocsError};

/// HTTPie invocation reproducing the request
pub struct HttpieRequestSnippet;

impl Snippet for HttpieRequestSnippet {
    fn name(&self) -> &'static str {
        "httpie-request"
    }

    fn render(&self, exchange: &Exchange, config: &RestDocsConfig) -> Result<String, RestDocsError> {
        let request = &exchange.request;
        let uri = config.documented_uri(request.path_and_query());
        let body = formatted_body(&request.headers, &request.body, config)?;

        let mut command = if body.is_empty() {
            "$ ".to_string()
        } else {
            format!("$ echo {} | ", shell_quote(&body))
        };
        command.push_str(&format!("http {} {}", request.method, shell_quote(&uri)));

        for (name, value) in documented_headers(&request.headers, config) {
            if name.eq_ignore_ascii_case(HOST.as_str())
                || name.eq_ignore_ascii_case(CONTENT_LENGTH.as_str())
            {
                continue;
            }
            command.push_str(&format!(" \\\n    {}", shell_quote(&format!("{name}:{value}"))));
        }

        Ok(config.format.code_block(Some("bash"), &command))
    }
}
