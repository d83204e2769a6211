//! ZXC Service Common
//!
//! Pieces shared by the address and user services.
//!
//! - [`envelope`]: the uniform JSON error body and the `ApiError` type handlers return
//! - [`fault`]: the process-wide fault handler wrapped around every router
//! - [`telemetry`]: tracing setup and the `/health` handler

pub mod envelope;
pub mod fault;
pub mod telemetry;

pub use envelope::{ApiError, ErrorEnvelope};
pub use fault::{error_handler, with_fault_handling};
pub use telemetry::{health_check, init_tracing};
