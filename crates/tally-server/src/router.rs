//! Axum router wiring.
//!
//! `/api/counter/*` carries the counter endpoints, `/healthz` the liveness probe.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{api, app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/counter", get(api::counter::get_value))
        .route("/api/counter/increment", post(api::counter::increment))
        .route("/api/counter/decrement", post(api::counter::decrement))
        .route("/api/counter/reset", post(api::counter::reset))
        .route("/healthz", get(ops::healthz))
        .with_state(state)
}
