//! ZXC Address Service
//!
//! Read-only address lookups backed by an in-memory dataset.

use std::sync::Arc;

use address_service::{router, Config};
use anyhow::{Context, Result};
use clap::Parser;
use service_common::init_tracing;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = Config::parse();

    info!("Starting ZXC Address Service");

    let store = config.load_store().context("Failed to load address seed data")?;
    info!("Address store ready with {} records", store.len());

    let app = router(Arc::new(store));

    let addr = config.listen_addr();
    info!("Address Service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
