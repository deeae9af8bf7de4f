//! Climate API HTTP Server Binary
//!
//! Opens the dataset, sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Serve Resources/hawaii.sqlite from the working directory
//! cargo run --bin climate-server
//!
//! # Serve another copy of the dataset
//! DATABASE_URL=/data/hawaii.sqlite cargo run --bin climate-server
//!
//! # Use a repository.toml instead of environment variables
//! CLIMATE_CONFIG=repository.toml cargo run --bin climate-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 5000)
//! - `DATABASE_URL`: Dataset path (default: Resources/hawaii.sqlite)
//! - `REPOSITORY_TYPE`: `sqlite` (default) or `local` for an empty in-memory store
//! - `CLIMATE_CONFIG`: Path to a `repository.toml` (takes precedence over the env vars)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use climate_api::db::RepositoryFactory;
use climate_api::http::{create_router, AppState};

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

    info!("Starting Climate API server");

    let repository = match env::var("CLIMATE_CONFIG") {
        Ok(path) => {
            info!("Loading repository configuration from {}", path);
            RepositoryFactory::from_config_file(&path).await?
        }
        Err(_) => RepositoryFactory::from_env().await?,
    };
    info!("Repository initialized successfully");

    let state = AppState::new(repository);
    let app = create_router(state);

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(5000);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
