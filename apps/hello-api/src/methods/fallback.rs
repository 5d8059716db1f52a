use axum::http::{Method, Uri};

use crate::error::ApiError;

pub async fn route_not_found(uri: Uri) -> ApiError {
    tracing::debug!(path = %uri.path(), "no route matched");
    ApiError::route_not_found(uri.path())
}

pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    tracing::debug!(method = %method, path = %uri.path(), "method not allowed");
    ApiError::method_not_allowed(method.as_str(), uri.path())
}
