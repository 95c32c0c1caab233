//! Stargaze HTTP Server Binary
//!
//! Loads configuration and the observation point file, then serves the REST API.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin stargaze-server
//!
//! STARGAZE_CONFIG=/etc/stargaze.toml PORT=9000 cargo run --bin stargaze-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `STARGAZE_CONFIG`: Path to the TOML config (default: search `stargaze.toml`)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use stargaze::http::{create_router, AppState};
use stargaze::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Stargaze HTTP Server");

    let config_path = env::var("STARGAZE_CONFIG").ok().map(PathBuf::from);
    let config = AppConfig::load(config_path.as_deref())?;
    info!(
        "Site {} ({}, {})",
        config.site.name, config.site.latitude, config.site.longitude
    );

    let state = AppState::from_config(&config)?;
    info!("Loaded {} observation points", state.service.points().len());

    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
