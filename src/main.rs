//! Entry point for the shift pay engine server.
//!
//! Loads attendance data, builds the HTTP router and starts serving
//! requests.
//!
//! # Environment Variables
//!
//! - `HOST_ADDRESS`: bind address (default: 127.0.0.1:8000)
//! - `ATTENDANCE_DATA`: attendance JSON file (default: data/attendance.json)
//! - `RUST_LOG`: log filter (default: info)
//!
//! A `.env` file in the working directory is honoured when present.

use tracing::info;
use tracing_subscriber::EnvFilter;

use shiftpay_engine::api::{AppState, create_router};
use shiftpay_engine::config::Config;
use shiftpay_engine::store::JsonStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("Starting shift pay engine");

    let config = Config::from_env()?;

    let store = JsonStore::load(&config.data_path)?;
    info!(
        records = store.len(),
        path = %config.data_path.display(),
        "Attendance data loaded"
    );

    let state = AppState::new(store);
    let app = create_router(state);

    info!("Server listening on http://{}", config.host_address);

    let listener = tokio::net::TcpListener::bind(config.host_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
