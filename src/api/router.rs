use std::any::Any;
use std::time::Duration;

use axum::{
    http::{HeaderName, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::error;

use super::health;
use super::middleware::{logging_middleware, REQUEST_ID_HEADER};
use super::state::AppState;
use super::types::{ApiError, GENERIC_ERROR_MESSAGE};
use super::users;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Create the full router with the default request timeout
pub fn create_router(state: AppState) -> Router {
    create_router_with_timeout(state, DEFAULT_REQUEST_TIMEOUT)
}

/// Create the full router with application state
pub fn create_router_with_timeout(state: AppState, request_timeout: Duration) -> Router {
    let router = Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // User CRUD
        .merge(users::create_users_router())
        .with_state(state);

    with_middleware(router, request_timeout)
}

/// Wrap routes in the middleware stack, innermost first
fn with_middleware(router: Router, request_timeout: Duration) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
}

/// Turn a handler panic into a 500 in the error envelope
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    error!(panic = %detail, "Handler panicked");

    ApiError::internal(GENERIC_ERROR_MESSAGE).into_response()
}
