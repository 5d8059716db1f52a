//! Request builders for [`MockClient::perform`](crate::MockClient::perform)

use bytes::Bytes;
use http::{request::Builder, Method, Request};

use crate::RestDocsError;

/// Start a request with an arbitrary method; finish it with `.body(..)`
pub fn request(method: Method, uri: &str) -> Builder {
    Request::builder().method(method).uri(uri)
}

/// `GET` without body or headers
pub fn get(uri: &str) -> Result<Request<Bytes>, RestDocsError> {
    Ok(request(Method::GET, uri).body(Bytes::new())?)
}

/// `POST` with a body and no headers
pub fn post(uri: &str, body: impl Into<Bytes>) -> Result<Request<Bytes>, RestDocsError> {
    Ok(request(Method::POST, uri).body(body.into())?)
}
