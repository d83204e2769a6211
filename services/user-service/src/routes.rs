//! HTTP surface of the user service.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::Uri,
    routing::get,
    Json, Router,
};
use service_common::{health_check, with_fault_handling, ApiError};
use tracing::warn;

use crate::dto::AddressDto;
use crate::service::UserService;

pub const SERVICE_NAME: &str = "user-service";

#[derive(Clone)]
struct AppState {
    users: Arc<UserService>,
}

pub fn router(users: Arc<UserService>) -> Router {
    let app = Router::new()
        .route("/health", health_check(SERVICE_NAME))
        .route("/users/address/:address_id", get(get_address))
        .with_state(AppState { users });

    with_fault_handling(app)
}

/// Every downstream failure (transport, non-2xx, decode) is reported as 404.
/// The real cause only reaches the log.
async fn get_address(
    State(state): State<AppState>,
    Path(address_id): Path<i64>,
    uri: Uri,
) -> Result<Json<AddressDto>, ApiError> {
    match state.users.get_user_address(address_id).await {
        Ok(address) => Ok(Json(address)),
        Err(e) => {
            warn!(address_id, error = %e, "Address lookup failed, answering Not Found");
            Err(ApiError::not_found(uri.path()))
        }
    }
}
