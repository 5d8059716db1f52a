use super::{formatted_body, Snippet};
use crate::{Exchange, RestDocsConfig, RestDocsError};

/// Request body verbatim
pub struct RequestBodySnippet;

/// Response body verbatim
pub struct ResponseBodySnippet;

impl Snippet for RequestBodySnippet {
    fn name(&self) -> &'static str {
        "request-body"
    }

    fn render(&self, exchange: &Exchange, config: &RestDocsConfig) -> Result<String, RestDocsError> {
        let request = &exchange.request;
        let body = formatted_body(&request.headers, &request.body, config)?;
        Ok(config.format.code_block(None, &body))
    }
}

impl Snippet for ResponseBodySnippet {
    fn name(&self) -> &'static str {
        "response-body"
    }

    fn render(&self, exchange: &Exchange, config: &RestDocsConfig) -> Result<String, RestDocsError> {
        let response = &exchange.response;
        let body = formatted_body(&response.headers, &response.body, config)?;
        Ok(config.format.code_block(None, &body))
    }
}
