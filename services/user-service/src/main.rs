//! ZXC User Service
//!
//! Resolves user addresses through the address service.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use service_common::init_tracing;
use tracing::info;
use user_service::{router, Config, HttpAddressClient, UserService};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = Config::parse();

    info!("Starting ZXC User Service");

    let client = HttpAddressClient::new(&config.address_service_url)?;
    info!("Address service at {}", client.base_url());

    let app = router(Arc::new(UserService::new(Arc::new(client))));

    let addr = config.listen_addr();
    info!("User Service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
