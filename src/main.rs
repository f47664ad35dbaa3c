//! Kinship admin console backend.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use kinship_admin::config::Config;
use kinship_admin::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(config.log_json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!config.log_json).then(|| tracing_subscriber::fmt::layer()))
        .init();

    tracing::info!("Starting Kinship admin console backend");
    tracing::info!("Bind address: {}", config.bind_addr);
    tracing::info!("Simulated latency: {:?}", config.mock_latency);

    if config.api_psk.is_none() {
        tracing::warn!("No API PSK configured (KINSHIP_API_PSK). Authentication is disabled!");
    }
    if !config.seed_fixtures {
        tracing::info!("Fixture seeding disabled; collections start empty");
    }

    let bind_addr = config.bind_addr;
    let state = AppState::new(config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("Server listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
