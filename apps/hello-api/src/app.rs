use axum::{
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::MiddlewareConfig;
use crate::constants::REQUEST_ID_HEADER;
use crate::docs::ApiDoc;
use crate::methods::fallback::{method_not_allowed, route_not_found};
use crate::methods::health_check::health_check;
use crate::methods::hello::hello;
use crate::methods::routes::{HELLO_PATH, OPENAPI_JSON_PATH, SERVICE_DOCS_PATH, SERVICE_HEALTH_PATH};
use crate::state::AppState;

/// Routes plus the full middleware stack, shared by the binary and the tests
pub fn build_router(state: AppState, config: &MiddlewareConfig) -> Router {
    let app = Router::new()
        .route(HELLO_PATH, get(hello))
        .route(SERVICE_HEALTH_PATH, get(health_check))
        .merge(SwaggerUi::new(SERVICE_DOCS_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state);

    apply_middleware(app, config)
}

/// Wrap `app` in the service middleware stack
pub fn apply_middleware(mut app: Router, config: &MiddlewareConfig) -> Router {
    // ============================================
    // Middleware stack (applied inner to outer)
    // Order: Request → Timeout → CORS → Body Limit → Request ID → Trace → Handler
    // ============================================

    // 1. Trace layer (innermost - closest to handler)
    app = app.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(tracing::Level::DEBUG))
            .on_response(DefaultOnResponse::new().level(tracing::Level::DEBUG)),
    );

    // 2. Request ID layers
    let x_request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    app = app
        .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
        .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid));

    // 3. Body limit layer
    app = app.layer(RequestBodyLimitLayer::new(config.max_body_size));

    // 4. CORS layer (the service only reads)
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, x_request_id]);
    let cors_layer = if config.allows_any_origin() {
        cors_layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    tracing::warn!(origin = %o, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        cors_layer.allow_origin(origins)
    };
    app = app.layer(cors_layer);

    // 5. Timeout layer (outermost, returns 408 Request Timeout)
    app.layer(TimeoutLayer::with_status_code(
        StatusCode::REQUEST_TIMEOUT,
        config.request_timeout,
    ))
}
