//! Counter endpoints.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::ApiError;
use crate::app_state::AppState;

/// Success body for every counter endpoint.
#[derive(Debug, Serialize)]
pub struct ValueBody {
    pub value: i64,
}

type ApiResult = std::result::Result<Json<ValueBody>, ApiError>;

fn body(value: i64) -> Json<ValueBody> {
    Json(ValueBody { value })
}

pub async fn get_value(State(app): State<AppState>) -> Json<ValueBody> {
    body(app.counter().get())
}

pub async fn increment(State(app): State<AppState>) -> ApiResult {
    let value = app.counter().increment()?;
    tracing::debug!(value, "counter incremented");
    Ok(body(value))
}

pub async fn decrement(State(app): State<AppState>) -> ApiResult {
    let value = app.counter().decrement()?;
    tracing::debug!(value, "counter decremented");
    Ok(body(value))
}

pub async fn reset(State(app): State<AppState>) -> Json<ValueBody> {
    let value = app.counter().reset();
    tracing::debug!(value, "counter reset");
    body(value)
}
