//! HTTP surface of the address service.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::Uri,
    routing::{any, get},
    Json, Router,
};
use service_common::{error_handler, health_check, with_fault_handling, ApiError};
use tracing::{debug, info};

use crate::model::AddressRecord;
use crate::store::AddressStore;

pub const SERVICE_NAME: &str = "address-service";

#[derive(Clone)]
struct AppState {
    store: Arc<AddressStore>,
}

/// Full router: lookups, `/error`, `/health`, wrapped in the fault layers.
pub fn router(store: Arc<AddressStore>) -> Router {
    let app = Router::new()
        .route("/health", health_check(SERVICE_NAME))
        .route("/addresses/:address_id", get(get_address))
        .route("/error", any(error_handler))
        .with_state(AppState { store });

    with_fault_handling(app)
}

async fn get_address(
    State(state): State<AppState>,
    Path(address_id): Path<i64>,
    uri: Uri,
) -> Result<Json<AddressRecord>, ApiError> {
    match state.store.lookup(address_id) {
        Some(record) => {
            debug!("Address {} found", address_id);
            Ok(Json(record.clone()))
        }
        None => {
            info!("Address {} not found", address_id);
            Err(ApiError::not_found(uri.path()))
        }
    }
}
