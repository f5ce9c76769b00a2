use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use tracing::warn;
use crate::controller::AppState;
use crate::helpers::error_response::error_response;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/places/:place_id", get(retrieve_place_details))
        .route_layer(Extension(app_state))
}

pub async fn retrieve_place_details(
    Extension(app_state): Extension<AppState>,
    Path(place_id): Path<String>,
) -> impl IntoResponse {
    let details_res = app_state
        .details
        .place_details(&place_id)
        .await;

    return match details_res {
        Ok(details) => (StatusCode::OK, Json(details)).into_response(),
        Err(e) => {
            warn!("Something went wrong retrieving details for {} due to: {}", place_id, e);
            error_response(&e)
        }
    };
}
