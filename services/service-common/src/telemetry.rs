//! Tracing setup and health reporting.

use axum::{
    routing::{get, MethodRouter},
    Json,
};
use tracing_subscriber::EnvFilter;

/// Install the JSON fmt subscriber. Level comes from `RUST_LOG`, default `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .init();
}

/// `GET /health` for the named service.
pub fn health_check<S>(service: &'static str) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    get(move || async move {
        Json(serde_json::json!({
            "status": "healthy",
            "service": service,
            "version": env!("CARGO_PKG_VERSION")
        }))
    })
}
