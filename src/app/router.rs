use crate::app::state::AppState;
use crate::handler::health::health_handler;
use crate::handler::logging::{get_logging_handler, update_logging_handler};
use axum::Router;
use axum::routing::get;

/// Build the HTTP router (health + logging resource).
///
/// The logging resource accepts exactly GET and PATCH; axum answers 405 for
/// anything else.
pub fn main_router(state: AppState) -> Router {
    let v1_health_router = Router::new().route("/v1/health", get(health_handler));

    let v1_logging_router = Router::new()
        .route(
            "/v1/logging",
            get(get_logging_handler).patch(update_logging_handler),
        )
        .with_state(state);

    Router::new()
        .merge(v1_health_router)
        .merge(v1_logging_router)
}
