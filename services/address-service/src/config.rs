use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::store::{AddressStore, SeedError};

/// Address service configuration, from flags or environment.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8081)]
    pub port: u16,

    /// JSON seed file replacing the embedded dataset
    #[arg(long, env = "ADDRESS_SEED_FILE")]
    pub seed_file: Option<PathBuf>,
}

impl Config {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    pub fn load_store(&self) -> Result<AddressStore, SeedError> {
        match &self.seed_file {
            Some(path) => AddressStore::from_file(path),
            None => AddressStore::seeded(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_flags() {
        let config =
            Config::try_parse_from(["address-service", "--port", "9000", "--seed-file", "/tmp/a.json"])
                .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.seed_file, Some(PathBuf::from("/tmp/a.json")));
        assert_eq!(config.listen_addr().port(), 9000);
    }

    #[test]
    fn test_embedded_store_without_seed_file() {
        let config = Config {
            port: 8081,
            seed_file: None,
        };
        assert_eq!(config.load_store().unwrap().len(), 4);
    }
}
