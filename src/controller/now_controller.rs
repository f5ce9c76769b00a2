use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use crate::controller::AppState;
use crate::helpers::error_response::error_response;
use crate::repositories::location_provider::locate;
use crate::session::{classify, decide, Intent, NowSnapshot, PanRelease, Target};

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/now", get(retrieve_now))
        .route("/now/refresh", post(refresh_places))
        .route("/now/skip", post(skip_place))
        .route("/now/save", post(save_place))
        .route("/now/consider", post(consider_place))
        .route("/now/gesture", post(release_gesture))
        .route("/now/considering", delete(clear_considering))
        .route("/now/considering/:place_id", delete(remove_from_considering))
        .route("/now/reset", post(reset_session))
        .route_layer(Extension(app_state))
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct PlaceDecision {
    pub place_id: String,
}

#[derive(Clone, Serialize, Debug)]
pub struct DecisionResponse {
    /// Set when the decision was a save.
    pub saved: Option<bool>,
    /// `None` when nothing was applied.
    pub intent: Option<Intent>,
    #[serde(flatten)]
    pub snapshot: NowSnapshot,
}

pub async fn retrieve_now(
    Extension(app_state): Extension<AppState>,
) -> impl IntoResponse {
    let snapshot = app_state.now.lock().await.snapshot();
    (StatusCode::OK, Json(snapshot))
}

pub async fn refresh_places(
    Extension(app_state): Extension<AppState>,
) -> impl IntoResponse {
    let region = match locate(app_state.location.as_ref()).await {
        Ok(region) => region,
        Err(e) => {
            warn!("Something went wrong locating the device due to: {}", e);
            return error_response(&e);
        }
    };

    let settings = &app_state.search_settings;
    let search_res = app_state
        .search
        .search_nearby(
            region.latitude,
            region.longitude,
            settings.radius_meters,
            &settings.query,
        ).await;

    return match search_res {
        Ok(places) => {
            let mut now = app_state.now.lock().await;
            now.replace_places(region, places);
            (StatusCode::OK, Json(now.snapshot())).into_response()
        }
        Err(e) => {
            warn!("Something went wrong searching nearby places due to: {}", e);
            error_response(&e)
        }
    };
}

async fn decide_on(
    app_state: &AppState,
    intent: Intent,
    target: Target<'_>,
) -> DecisionResponse {
    let decision = decide(
        &app_state.now,
        app_state.saves.as_ref(),
        intent,
        target,
    ).await;

    DecisionResponse {
        saved: decision.saved,
        intent: decision.intent,
        snapshot: app_state.now.lock().await.snapshot(),
    }
}

pub async fn skip_place(
    Extension(app_state): Extension<AppState>,
    Json(body): Json<PlaceDecision>,
) -> impl IntoResponse {
    Json(decide_on(&app_state, Intent::Skip, Target::Place(&body.place_id)).await)
}

pub async fn save_place(
    Extension(app_state): Extension<AppState>,
    Json(body): Json<PlaceDecision>,
) -> impl IntoResponse {
    Json(decide_on(&app_state, Intent::Save, Target::Place(&body.place_id)).await)
}

pub async fn consider_place(
    Extension(app_state): Extension<AppState>,
    Json(body): Json<PlaceDecision>,
) -> impl IntoResponse {
    Json(decide_on(&app_state, Intent::Consider, Target::Place(&body.place_id)).await)
}

/// Commits the gesture against the current candidate, or leaves the session
/// untouched if the release did not cross a threshold.
pub async fn release_gesture(
    Extension(app_state): Extension<AppState>,
    Json(release): Json<PanRelease>,
) -> impl IntoResponse {
    let response = match classify(&release) {
        Some(intent) => decide_on(&app_state, intent, Target::Current).await,
        None => DecisionResponse {
            saved: None,
            intent: None,
            snapshot: app_state.now.lock().await.snapshot(),
        },
    };

    Json(response)
}

pub async fn remove_from_considering(
    Extension(app_state): Extension<AppState>,
    Path(place_id): Path<String>,
) -> impl IntoResponse {
    let mut now = app_state.now.lock().await;
    now.remove_from_considering(&place_id);
    Json(now.snapshot())
}

pub async fn clear_considering(
    Extension(app_state): Extension<AppState>,
) -> impl IntoResponse {
    let mut now = app_state.now.lock().await;
    now.clear_considering();
    Json(now.snapshot())
}

pub async fn reset_session(
    Extension(app_state): Extension<AppState>,
) -> impl IntoResponse {
    let mut now = app_state.now.lock().await;
    now.reset();
    info!("Session reset");
    Json(now.snapshot())
}
