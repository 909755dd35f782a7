use std::{future::Future, net::SocketAddr};

use axum::Router;
use configs::AppConfig;
use service::file::user_store::FileUserStore;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::routes::{self, AppState};

/// Open the storage file named by the config and wire it into the router.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let store = FileUserStore::new(&cfg.storage.path).await?;
    info!(path = %cfg.storage.path, "user storage ready");
    Ok(routes::build_router(AppState::new(store)))
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}

/// Public entry: build the app and run the HTTP server until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;

    let addr: SocketAddr = cfg.bind_addr().parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "starting server");
    serve(listener, app, shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}
