use http::header::{CONTENT_LENGTH, HOST};

use super::{documented_headers, formatted_body, shell_quote, Snippet};
use crate::{Exchange, RestDocsConfig, RestDocsError};

/// `curl` invocation reproducing the request
pub struct CurlRequestSnippet;

impl Snippet for CurlRequestSnippet {
    fn name(&self) -> &'static str {
        "curl-request"
    }

    fn render(&self, exchange: &Exchange, config: &RestDocsConfig) -> Result<String, RestDocsError> {
        let request = &exchange.request;
        let uri = config.documented_uri(request.path_and_query());

        let mut command = format!("$ curl {} -i -X {}", shell_quote(&uri), request.method);

        // curl derives these from the URI and the payload
        for (name, value) in documented_headers(&request.headers, config) {
            if name.eq_ignore_ascii_case(HOST.as_str())
                || name.eq_ignore_ascii_case(CONTENT_LENGTH.as_str())
            {
                continue;
            }
            command.push_str(&format!(" \\\n    -H {}", shell_quote(&format!("{name}: {value}"))));
        }

        let body = formatted_body(&request.headers, &request.body, config)?;
        if !body.is_empty() {
            command.push_str(&format!(" \\\n    -d {}", shell_quote(&body)));
        }

        Ok(config.format.code_block(Some("bash"), &command))
    }
}
