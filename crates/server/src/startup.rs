use std::{future::Future, sync::Arc};

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use service::gateway::repo::SeaOrmGateway;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Router over an already-built state, with the default CORS policy.
pub fn app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

/// Connect, migrate and wire the SeaORM gateway into fresh handler state.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<ServerState> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    migration::Migrator::up(&db, None).await?;
    info!("migrations applied");
    Ok(ServerState::new(Arc::new(SeaOrmGateway::new(db))))
}

/// Serve on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: ServerState, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(%addr, "listening");
    axum::serve(listener, app(state)).with_graceful_shutdown(shutdown).await?;
    Ok(())
}

/// Public entry: load config, prepare the database and run until Ctrl+C.
pub async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::load_and_validate()?;
    let state = build_state(&cfg).await?;
    let listener = TcpListener::bind(cfg.server.bind_addr()).await?;
    serve(listener, state, async {
        let _ = tokio::signal::ctrl_c().await;
        info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
    })
    .await
}
