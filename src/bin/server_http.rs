//! Tic-tac-toe arena server (HTTP transport).

use anyhow::Result;
use std::sync::Arc;
use tictactoe_arena::{GameService, router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    info!(port, "Starting tic-tac-toe arena server");

    let service = Arc::new(GameService::new());
    let app = router(service);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
    info!("Server ready at http://localhost:{}/", port);

    axum::serve(listener, app).await?;

    Ok(())
}
