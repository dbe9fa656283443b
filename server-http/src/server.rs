use std::future::Future;

use axum::{extract::Request, ServiceExt};
use shared::config::Config;
use tokio::net::TcpListener;
use tracing::info;

use crate::routes::{build_app, App};

/// Bind the configured address and serve until Ctrl+C or SIGTERM.
pub async fn serve(config: &Config) -> shared::Result<()> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| shared::Error::Bind { addr, source })?;

    info!("HTTP Server listening on http://{}", listener.local_addr()?);
    info!("Try: curl http://localhost:{}/health", config.port);

    serve_with_shutdown(listener, build_app(), shutdown_signal()).await
}

/// Serve `app` on an already bound listener until `signal` resolves.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    app: App,
    signal: F,
) -> shared::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(signal)
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received terminate signal");
        },
    }

    info!("Shutting down gracefully...");
}
