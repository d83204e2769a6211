//! ZXC Address Service
//!
//! Serves a fixed set of address records over HTTP.
//!
//! ## Endpoints
//!
//! - `GET /addresses/{addressId}`: the record, or a 404 error envelope
//! - `GET /error`: the generic fault handler
//! - `GET /health`: liveness

pub mod config;
pub mod model;
pub mod routes;
pub mod store;

pub use config::Config;
pub use model::AddressRecord;
pub use routes::router;
pub use store::{AddressStore, SeedError};
