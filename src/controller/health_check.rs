use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde_json::json;
use crate::controller::AppState;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(get_health_check))
        .route_layer(Extension(app_state))
}

/// Liveness plus a hint whether the session has a place list yet.
async fn get_health_check(
    Extension(app_state): Extension<AppState>,
) -> impl IntoResponse {
    let places_loaded = app_state.now.lock().await.places().len();
    (StatusCode::OK, Json(json!({ "status": "ok", "places_loaded": places_loaded })))
}
