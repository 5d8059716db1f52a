#![allow(dead_code)]

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use http::{header, Request, Response, StatusCode};
use http_body_util::{BodyExt, Full};
use tower::service_fn;
use tower::util::ServiceFn;

type ResponseFuture = Pin<Box<dyn Future<Output = Result<Response<Full<Bytes>>, Infallible>> + Send>>;
type Handler = fn(Request<Full<Bytes>>) -> ResponseFuture;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Minimal service: `GET /hello` greets, `POST /greetings` echoes JSON, anything else is 404
pub fn greeting_service() -> ServiceFn<Handler> {
    service_fn(route as Handler)
}

fn route(request: Request<Full<Bytes>>) -> ResponseFuture {
    Box::pin(async move {
        let (parts, body) = request.into_parts();
        let body = match body.collect().await {
            Ok(collected) => collected.to_bytes(),
            Err(never) => match never {},
        };

        let response = match (parts.method.as_str(), parts.uri.path()) {
            ("GET", "/hello") => Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, "text/plain;charset=UTF-8")
                .body(Full::new(Bytes::from_static(b"hello"))),
            ("POST", "/greetings") => Response::builder()
                .status(StatusCode::CREATED)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Full::new(body)),
            _ => Response::builder()
                .status(StatusCode::NOT_FOUND)
                .body(Full::new(Bytes::new())),
        };

        Ok::<_, Infallible>(response.expect("static response parts are valid"))
    })
}
