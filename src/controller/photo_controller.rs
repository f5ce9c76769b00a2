use axum::body::Bytes;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use crate::controller::AppState;
use crate::repositories::storage_client::{delete_photo, upload_photo};

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/photos", post(add_photo).delete(remove_photo))
        .route_layer(Extension(app_state))
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct PhotoParams {
    /// Local file name or URI of the picked image; only its extension is used.
    pub name: String,
}

pub async fn add_photo(
    Extension(app_state): Extension<AppState>,
    Query(query): Query<PhotoParams>,
    body: Bytes,
) -> impl IntoResponse {
    if body.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "success": false, "error": "Please select or take a photo" })),
        ).into_response();
    }

    let result = upload_photo(
        app_state.photos.as_ref(),
        &app_state.user_id,
        &query.name,
        body.to_vec(),
    ).await;

    let status = if result.success { StatusCode::CREATED } else { StatusCode::BAD_GATEWAY };
    (status, Json(result)).into_response()
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct RemovePhotoParams {
    pub url: String,
}

pub async fn remove_photo(
    Extension(app_state): Extension<AppState>,
    Query(query): Query<RemovePhotoParams>,
) -> impl IntoResponse {
    let deleted = delete_photo(app_state.photos.as_ref(), &query.url).await;
    (StatusCode::OK, Json(json!({ "deleted": deleted })))
}
