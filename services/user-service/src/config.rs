use std::net::SocketAddr;

use clap::Parser;

/// User service configuration, from flags or environment.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8082)]
    pub port: u16,

    /// Base URL of the address service (logical service name)
    #[arg(long, env = "ADDRESS_SERVICE_URL", default_value = "http://address-service:8081")]
    pub address_service_url: String,
}

impl Config {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
