//! Global Fault Handling
//!
//! Handlers report their own misses through [`ApiError`]. Everything else that
//! goes wrong while serving a request (unknown route, wrong method, a path
//! parameter that does not parse, a panicking handler) is caught here and
//! rewritten into the same [`ErrorEnvelope`] shape, keeping the status the
//! framework resolved for it.

use axum::{
    extract::Request,
    http::{StatusCode, Uri},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::warn;

use crate::envelope::{ApiError, Enveloped, ErrorEnvelope};

/// Wrap a fully-stated router with the layers every service mounts.
///
/// Layer order, innermost first: panic catcher, envelope rewriting, request
/// tracing, CORS.
pub fn with_fault_handling(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::new())
        .layer(middleware::from_fn(envelope_faults))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// `/error`: a direct request carries no fault, so the status defaults to 500.
pub async fn error_handler(uri: Uri) -> ApiError {
    ApiError::Unhandled {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        path: uri.path().to_string(),
    }
}

async fn envelope_faults(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let response = next.run(request).await;

    let status = response.status();
    let is_fault = status.is_client_error() || status.is_server_error();
    if !is_fault || response.extensions().get::<Enveloped>().is_some() {
        return response;
    }

    warn!(status = status.as_u16(), path = %path, "Unhandled fault");
    ErrorEnvelope::new(status, path).into_response()
}
