//! ZXC User Service
//!
//! Resolves a user's address by calling the address service.
//!
//! ## Endpoints
//!
//! - `GET /users/address/{addressId}`: the remote address, or a 404 error envelope
//! - `GET /health`: liveness

pub mod client;
pub mod config;
pub mod dto;
pub mod routes;
pub mod service;

pub use client::{AddressClient, ClientError, HttpAddressClient};
pub use config::Config;
pub use dto::AddressDto;
pub use routes::router;
pub use service::UserService;
