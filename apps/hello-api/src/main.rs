use std::future::IntoFuture;
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::sync::oneshot;

use hello_api::build_router;
use hello_api::config::{MiddlewareConfig, ServiceConfig};
use hello_api::constants::{ENV, SERVICE};
use hello_api::methods::routes::{HELLO_PATH, SERVICE_DOCS_PATH};
use hello_api::shutdown::{drain_with_deadline, shutdown_signal};
use hello_api::state::AppState;
use hello_api::telemetry::init_tracing;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let env = std::env::var(ENV)
        .map_err(|_| format!("{} environment variable must be set", ENV))?;

    init_tracing(&env)?;
    tracing::info!(service = SERVICE, env = %env, "tracing initialized");

    let service_config = ServiceConfig::from_env();
    let middleware_config = MiddlewareConfig::from_env();
    tracing::info!(
        port = service_config.port,
        greeting = %service_config.greeting,
        request_timeout_secs = middleware_config.request_timeout.as_secs(),
        max_body_size = middleware_config.max_body_size,
        shutdown_timeout_secs = middleware_config.shutdown_timeout.as_secs(),
        cors_origins = ?middleware_config.cors_allowed_origins,
        "configuration loaded"
    );

    let app_state = AppState::new(&service_config.greeting, &env);
    let app = build_router(app_state, &middleware_config);

    let addr = SocketAddr::from(([0, 0, 0, 0], service_config.port));
    let public_url = format!("http://127.0.0.1:{}", service_config.port);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    tracing::info!("hello-api is ready to accept requests at: {}", public_url);
    tracing::info!("greeting available at: {}{}", public_url, HELLO_PATH);
    tracing::info!("API docs available at: {}{}", public_url, SERVICE_DOCS_PATH);

    let (drain_tx, drain_rx) = oneshot::channel();
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = drain_tx.send(());
        })
        .into_future();

    drain_with_deadline(server, drain_rx, middleware_config.shutdown_timeout)
        .await
        .map_err(|e| format!("Server error: {}", e))?;

    tracing::info!("hello-api stopped");

    Ok(())
}
