//! In-process HTTP client for any `tower::Service`

use bytes::Bytes;
use http::{Request, Response, StatusCode};
use http_body_util::{BodyExt, Full};
use tower::{Service, ServiceExt};

use crate::error::BoxError;
use crate::exchange::body_text;
use crate::{CapturedRequest, CapturedResponse, Exchange, ExchangeHook, RestDocsError};

/// Sends requests straight into a service, without binding a socket
#[derive(Debug, Clone)]
pub struct MockClient<S> {
    service: S,
}

impl<S> MockClient<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }
}

impl<S, B> MockClient<S>
where
    S: Service<Request<Full<Bytes>>, Response = Response<B>> + Clone,
    S::Error: Into<BoxError>,
    B: http_body::Body,
    B::Error: Into<BoxError>,
{
    /// Send `request` and capture the full exchange
    ///
    /// Both bodies are buffered so that expectations and hooks can inspect
    /// them any number of times.
    pub async fn perform(&self, request: Request<Bytes>) -> Result<ResultActions, RestDocsError> {
        let (parts, body) = request.into_parts();

        let captured_request = CapturedRequest {
            method: parts.method.clone(),
            uri: parts.uri.clone(),
            version: parts.version,
            headers: parts.headers.clone(),
            body: body.clone(),
        };

        tracing::debug!(
            method = %captured_request.method,
            uri = %captured_request.uri,
            "performing request"
        );

        let response = self
            .service
            .clone()
            .oneshot(Request::from_parts(parts, Full::new(body)))
            .await
            .map_err(|e| {
                let err: BoxError = e.into();
                RestDocsError::Service(err.to_string())
            })?;

        let (parts, body) = response.into_parts();
        let body = body
            .collect()
            .await
            .map_err(|e| {
                let err: BoxError = e.into();
                RestDocsError::Body(err.to_string())
            })?
            .to_bytes();

        tracing::debug!(
            method = %captured_request.method,
            uri = %captured_request.uri,
            status = parts.status.as_u16(),
            body_len = body.len(),
            "request completed"
        );

        Ok(ResultActions {
            exchange: Exchange {
                request: captured_request,
                response: CapturedResponse {
                    status: parts.status,
                    version: parts.version,
                    headers: parts.headers,
                    body,
                },
            },
        })
    }
}

/// Expectations and hooks applied to a performed request
///
/// Every step consumes and returns `self`, so a failed expectation stops the
/// chain before any later hook runs.
#[derive(Debug, Clone)]
pub struct ResultActions {
    exchange: Exchange,
}

impl ResultActions {
    /// Fail with [`RestDocsError::UnexpectedStatus`] unless the status matches
    pub fn expect_status(self, expected: StatusCode) -> Result<Self, RestDocsError> {
        let actual = self.exchange.response.status;
        if actual != expected {
            tracing::warn!(
                method = %self.exchange.request.method,
                uri = %self.exchange.request.uri,
                expected = expected.as_u16(),
                actual = actual.as_u16(),
                "unexpected response status"
            );
            return Err(RestDocsError::UnexpectedStatus {
                method: self.exchange.request.method.clone(),
                uri: self.exchange.request.uri.clone(),
                expected,
                actual,
            });
        }
        Ok(self)
    }

    pub fn expect_ok(self) -> Result<Self, RestDocsError> {
        self.expect_status(StatusCode::OK)
    }

    /// Run a post-assertion hook with the captured exchange
    pub async fn and_do(self, hook: &dyn ExchangeHook) -> Result<Self, RestDocsError> {
        tracing::debug!(hook = hook.name(), "running exchange hook");
        hook.on_exchange(&self.exchange).await?;
        Ok(self)
    }

    pub fn status(&self) -> StatusCode {
        self.exchange.response.status
    }

    pub fn body_text(&self) -> String {
        body_text(&self.exchange.response.body)
    }

    pub fn exchange(&self) -> &Exchange {
        &self.exchange
    }

    pub fn into_exchange(self) -> Exchange {
        self.exchange
    }
}
