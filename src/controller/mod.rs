use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use anyhow::Context;
use axum::http::HeaderValue;
use axum::Router;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use tokio::sync::Mutex;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use crate::config::Config;
use crate::helpers::handler_404::page_not_found_handler;
use crate::repositories::api_client::ApiClient;
use crate::repositories::location_provider::FixedLocationProvider;
use crate::repositories::storage_client::StorageClient;
use crate::repositories::{
    JournalService, LocationProvider, PhotoStorage, PlaceDetailsService, SavedPlacesService,
    SearchService,
};
use crate::session::NowSession;
use crate::stores::{JournalLog, SavedList};

pub mod health_check;
pub mod journal_controller;
pub mod now_controller;
pub mod photo_controller;
pub mod places_controller;
pub mod saved_controller;

#[derive(Clone, Debug)]
pub struct SearchSettings {
    pub radius_meters: u32,
    pub query: String,
}

/// Everything the handlers share. There is exactly one `NowSession` per run.
#[derive(Clone)]
pub struct AppState {
    pub user_id: String,
    pub search_settings: SearchSettings,
    pub location: Arc<dyn LocationProvider>,
    pub search: Arc<dyn SearchService>,
    pub details: Arc<dyn PlaceDetailsService>,
    pub saves: Arc<dyn SavedPlacesService>,
    pub journal: Arc<dyn JournalService>,
    pub photos: Arc<dyn PhotoStorage>,
    pub now: Arc<Mutex<NowSession>>,
    pub saved_list: Arc<Mutex<SavedList>>,
    pub journal_log: Arc<Mutex<JournalLog>>,
}

impl AppState {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let timeout = Duration::from_secs(config.request_timeout_secs);
        let api_client = Arc::new(
            ApiClient::new(&config.api_url, config.api_token.clone(), timeout)
                .context("Error building the backend client")?,
        );
        let storage_client = StorageClient::new(
            config.storage_url.clone(),
            config.storage_bucket.clone(),
            config.api_token.clone(),
            timeout,
        )
        .context("Error building the storage client")?;
        let location = FixedLocationProvider::new(
            config.latitude,
            config.longitude,
            config.location_permission_granted,
        );

        Ok(Self {
            user_id: config.user_id.clone(),
            search_settings: SearchSettings {
                radius_meters: config.search_radius,
                query: config.search_query.clone(),
            },
            location: Arc::new(location),
            search: api_client.clone(),
            details: api_client.clone(),
            saves: api_client.clone(),
            journal: api_client,
            photos: Arc::new(storage_client),
            now: Arc::new(Mutex::new(NowSession::new(Duration::from_millis(config.focus_animation_ms)))),
            saved_list: Arc::new(Mutex::new(SavedList::new())),
            journal_log: Arc::new(Mutex::new(JournalLog::new())),
        })
    }
}

pub async fn serve(
    app_state: AppState,
    config: &Config,
) -> anyhow::Result<()> {
    let origins: Vec<HeaderValue> = config
        .origin_urls
        .split(',')
        .filter_map(|s| match s.trim().parse() {
            Ok(origin) => Some(origin),
            Err(e) => {
                warn!("Ignoring invalid origin {} due to: {}", s, e);
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    let application = router_endpoints(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    CorsLayer::new()
                        .allow_methods([
                            Method::GET,
                            Method::POST,
                            Method::PATCH,
                            Method::DELETE,
                            Method::OPTIONS
                        ])
                        .allow_origin(origins)
                        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
                )
        );

    let port = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!("Now server listening on: {}", port);
    axum::Server::bind(&port)
        .serve(application.into_make_service())
        .await
        .context("Error spinning up the now server")
}

pub fn router_endpoints(app_state: AppState) -> Router {
    health_check::router(app_state.clone())
        .merge(now_controller::router(app_state.clone()))
        .merge(places_controller::router(app_state.clone()))
        .merge(saved_controller::router(app_state.clone()))
        .merge(journal_controller::router(app_state.clone()))
        .merge(photo_controller::router(app_state))
        .fallback(page_not_found_handler)
}
