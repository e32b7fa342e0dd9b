use flight_api::error::MainError;
use flight_api::{AppState, router};
use shared::{init_tracing, load_config, shutdown_listener};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), MainError> {
    init_tracing()?;

    let config = load_config()?;
    info!(name: "config.loaded", config = ?config, "config loaded");

    let app = router(AppState::new(&config)?);

    info!("starting server at {}", config.listen_addr);
    let listener = TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_listener())
        .await?;

    Ok(())
}
