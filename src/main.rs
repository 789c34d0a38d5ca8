use std::sync::Arc;

use roshambo::{
    config::ServerConfig,
    session::{self, repository::InMemoryGameRepository, GameService},
    AppState,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roshambo=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    info!(bind_addr = %config.bind_addr, seeded = config.seed.is_some(), "Starting roshambo server");

    let repository = Arc::new(InMemoryGameRepository::new());
    let game_service = Arc::new(GameService::new(repository, config.seed));
    let app = session::router(AppState::new(game_service));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Server running on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
