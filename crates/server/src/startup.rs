use std::net::SocketAddr;

use axum::Router;
use common::env::StoreEnv;
use configs::AppConfig;
use tokio::signal;
use tracing::{error, info, warn};

use crate::routes;
use crate::state::AppState;

/// Open the configured store. A store that fails to open is logged and
/// treated as absent so the catalog keeps serving.
async fn open_store(cfg: &AppConfig) -> Option<service::storage::SharedStore> {
    match service::runtime::open_store(&cfg.database).await {
        Ok(store) => store,
        Err(e) => {
            error!(event = "store_open_failed", error = %e, "document store unavailable; continuing without it");
            None
        }
    }
}

/// Build the application for `cfg` without binding a socket.
pub async fn build_app(cfg: &AppConfig) -> Router {
    let store = open_store(cfg).await;
    let state = AppState::new(store, StoreEnv::capture());
    routes::build_router(state, routes::build_cors())
}

/// Public entry: build the app and run the HTTP server until Ctrl+C/SIGTERM.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await;

    let listener = tokio::net::TcpListener::bind(cfg.server.bind_addr()).await?;
    let addr: SocketAddr = listener.local_addr()?;
    info!(%addr, "starting server crate");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => warn!("received Ctrl+C, shutting down"),
        _ = terminate => warn!("received SIGTERM, shutting down"),
    }
}
