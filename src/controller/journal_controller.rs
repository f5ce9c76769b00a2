use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, patch};
use axum::{Extension, Json, Router};
use serde_json::json;
use tracing::warn;
use crate::controller::AppState;
use crate::helpers::error_response::error_response;
use crate::models::journal::{CreateJournalEntry, UpdateJournalEntry};
use crate::stores::journal_log;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/journal", get(retrieve_journal).post(add_journal_entry))
        .route("/journal/:entry_id", patch(update_journal_entry).delete(remove_journal_entry))
        .route_layer(Extension(app_state))
}

pub async fn retrieve_journal(
    Extension(app_state): Extension<AppState>,
) -> impl IntoResponse {
    let entries_res = journal_log::refresh(
        &app_state.journal_log,
        app_state.journal.as_ref(),
    ).await;

    return match entries_res {
        Ok(entries) => {
            (
                StatusCode::OK,
                Json(json!({ "count": entries.len(), "entries": entries })),
            ).into_response()
        }
        Err(e) => {
            warn!("Something went wrong retrieving journal entries due to: {}", e);
            error_response(&e)
        }
    };
}

pub async fn add_journal_entry(
    Extension(app_state): Extension<AppState>,
    Json(body): Json<CreateJournalEntry>,
) -> impl IntoResponse {
    if let Err(e) = body.validate() {
        return error_response(&e);
    }

    let create_res = journal_log::create_entry(
        &app_state.journal_log,
        app_state.journal.as_ref(),
        &body,
    ).await;

    return match create_res {
        Ok(entry) => (StatusCode::CREATED, Json(entry)).into_response(),
        Err(e) => {
            warn!("Something went wrong creating journal entry due to: {}", e);
            error_response(&e)
        }
    };
}

pub async fn update_journal_entry(
    Extension(app_state): Extension<AppState>,
    Path(entry_id): Path<String>,
    Json(body): Json<UpdateJournalEntry>,
) -> impl IntoResponse {
    if let Err(e) = body.validate() {
        return error_response(&e);
    }

    let update_res = journal_log::update_entry(
        &app_state.journal_log,
        app_state.journal.as_ref(),
        &entry_id,
        &body,
    ).await;

    return match update_res {
        Ok(entry) => (StatusCode::OK, Json(entry)).into_response(),
        Err(e) => {
            warn!("Something went wrong updating journal entry {} due to: {}", entry_id, e);
            error_response(&e)
        }
    };
}

pub async fn remove_journal_entry(
    Extension(app_state): Extension<AppState>,
    Path(entry_id): Path<String>,
) -> impl IntoResponse {
    let removed = journal_log::remove_entry(
        &app_state.journal_log,
        app_state.journal.as_ref(),
        &entry_id,
    ).await;

    let entries = app_state.journal_log.lock().await.entries().to_vec();
    let status = if removed { StatusCode::OK } else { StatusCode::BAD_GATEWAY };
    (status, Json(json!({ "removed": removed, "entries": entries })))
}
