use std::future::Future;
use std::time::Duration;

use tokio::signal;
use tokio::sync::oneshot;

/// Resolves once Ctrl+C or SIGTERM is received
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("received SIGTERM, initiating graceful shutdown");
        }
    }
}

/// Run `server` to completion, but give it at most `timeout` to drain once
/// `drain_started` fires. Open connections are dropped when the deadline passes.
pub async fn drain_with_deadline<F, E>(
    server: F,
    drain_started: oneshot::Receiver<()>,
    timeout: Duration,
) -> Result<(), E>
where
    F: Future<Output = Result<(), E>>,
{
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => return result,
        signalled = drain_started => {
            // Sender dropped without signalling: nothing to bound
            if signalled.is_err() {
                return server.await;
            }
        }
    }

    tracing::info!(
        timeout_secs = timeout.as_secs(),
        "allowing connections to drain"
    );

    match tokio::time::timeout(timeout, &mut server).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(
                timeout_secs = timeout.as_secs(),
                "shutdown deadline reached, closing remaining connections"
            );
            Ok(())
        }
    }
}
