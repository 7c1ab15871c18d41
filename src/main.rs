//! Service entry point.
//!
//! Configuration comes from the environment: `PORT` (default 8000) and
//! `DATA_FILE` (default `data.json`).

use std::net::SocketAddr;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use leave_desk::api::{create_router, AppState};
use leave_desk::store::Store;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(8000);
    let data_file = std::env::var("DATA_FILE").unwrap_or_else(|_| "data.json".to_string());

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        data_file = %data_file,
        "starting leave desk"
    );

    let store = Store::open(&data_file);
    let state = AppState::new(store);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{addr}");
    axum::serve(listener, create_router(state)).await?;

    Ok(())
}
