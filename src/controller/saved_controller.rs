use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, get};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;
use crate::controller::AppState;
use crate::helpers::error_response::error_response;
use crate::stores::saved_list;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/saved", get(retrieve_saved_places).post(save_place))
        .route("/saved/:save_id", delete(remove_saved_place))
        .route_layer(Extension(app_state))
}

pub async fn retrieve_saved_places(
    Extension(app_state): Extension<AppState>,
) -> impl IntoResponse {
    let saved_res = saved_list::refresh(
        &app_state.saved_list,
        app_state.saves.as_ref(),
    ).await;

    return match saved_res {
        Ok(places) => {
            (
                StatusCode::OK,
                Json(json!({ "count": places.len(), "places": places })),
            ).into_response()
        }
        Err(e) => {
            warn!("Something went wrong retrieving saved places due to: {}", e);
            error_response(&e)
        }
    };
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct SavePlace {
    pub place_id: String,
}

/// Save from outside the swipe flow, e.g. the details screen.
pub async fn save_place(
    Extension(app_state): Extension<AppState>,
    Json(body): Json<SavePlace>,
) -> impl IntoResponse {
    let saved = saved_list::save(
        &app_state.saved_list,
        app_state.saves.as_ref(),
        &body.place_id,
    ).await;

    (StatusCode::OK, Json(json!({ "saved": saved })))
}

pub async fn remove_saved_place(
    Extension(app_state): Extension<AppState>,
    Path(save_id): Path<String>,
) -> impl IntoResponse {
    let removed = saved_list::unsave(
        &app_state.saved_list,
        app_state.saves.as_ref(),
        &save_id,
    ).await;

    let status = if removed { StatusCode::OK } else { StatusCode::BAD_GATEWAY };
    (status, Json(json!({ "removed": removed })))
}
