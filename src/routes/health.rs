use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::AppState;

pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let storage = state.repository.backend();
    match state.repository.ping().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({ "status": "ok", "storage": storage })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "error", "storage": storage, "error": e.to_string() })),
        ),
    }
}
