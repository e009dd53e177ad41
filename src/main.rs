use std::net::SocketAddr;

use expense_tracker::config::Config;
use expense_tracker::shell::http::router;
use expense_tracker::shell::state::AppState;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;
    let app = router(AppState::new());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("expense tracker listening on http://{addr}");
    tracing::info!("health check: http://{addr}/api/health");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
