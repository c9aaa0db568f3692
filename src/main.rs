//! Vidhigya REST server.

use std::sync::Arc;

use vidhigya_backend::config::Config;
use vidhigya_backend::store::CollectionStore;
use vidhigya_backend::{create_router, init_tracing, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    init_tracing(&config.log_level, config.log_format);

    tracing::info!("Starting Vidhigya backend");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Static directory: {:?}", config.static_dir);

    let state = AppState {
        store: Arc::new(CollectionStore::seeded()),
        config: Arc::new(config.clone()),
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
