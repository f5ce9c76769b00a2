use clap::Parser;
use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use noms_now::config::Config;
use noms_now::controller::{self, AppState};
use noms_now::repositories::location_provider::locate;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    let config = Config::parse();
    info!("Starting noms-now in {} against {}", config.environment, config.api_url);

    let app_state = AppState::from_config(&config)?;
    preload_places(&app_state).await;

    controller::serve(app_state, &config).await
}

/// First load on startup. Failures leave the session empty; the client can
/// retry through the refresh endpoint.
async fn preload_places(app_state: &AppState) {
    let region = match locate(app_state.location.as_ref()).await {
        Ok(region) => region,
        Err(e) => {
            warn!("Could not locate device on startup due to: {}", e);
            return;
        }
    };

    let settings = &app_state.search_settings;
    match app_state
        .search
        .search_nearby(region.latitude, region.longitude, settings.radius_meters, &settings.query)
        .await
    {
        Ok(places) => app_state.now.lock().await.replace_places(region, places),
        Err(e) => warn!("Initial place search failed due to: {}", e),
    }
}
