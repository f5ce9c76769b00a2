use std::time::Duration;
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use crate::error::{NomsError, NomsResult};
use crate::models::journal::{CreateJournalEntry, JournalEntriesResponse, JournalEntry, UpdateJournalEntry};
use crate::models::place::{Place, PlaceDetails, PlaceResult, PlaceSearchResponse};
use crate::models::saved_place::{SavePlaceRequest, SavedPlace, SavedPlacesResponse};
use crate::repositories::{JournalService, PlaceDetailsService, SavedPlacesService, SearchService};

pub const MIN_SEARCH_RADIUS: u32 = 100;
pub const MAX_SEARCH_RADIUS: u32 = 50_000;
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the places, saves and journal endpoints of the REST backend.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl ApiClient {
    /// Every request is bounded by `timeout`.
    pub fn new(
        base_url: &str,
        token: Option<String>,
        timeout: Duration,
    ) -> NomsResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| NomsError::Validation(format!("invalid api url {}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(NomsError::Validation(format!("invalid api url {}", base_url)));
        }
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url,
            token,
        })
    }

    /// Appends percent-encoded path segments to the base URL. An empty last
    /// segment yields a trailing slash.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn authorized(&self, request: RequestBuilder) -> NomsResult<RequestBuilder> {
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| NomsError::Auth("Not authenticated".to_string()))?;
        Ok(request.header(AUTHORIZATION, format!("Bearer {}", token)))
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> NomsResult<T> {
        let response = self.authorized(request)?.send().await?;
        let response = check_status(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn send_empty(
        &self,
        request: RequestBuilder,
    ) -> NomsResult<()> {
        let response = self.authorized(request)?.send().await?;
        check_status(response).await?;
        Ok(())
    }
}

async fn check_status(response: Response) -> NomsResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(error_for_status(status, body))
}

pub fn error_for_status(status: StatusCode, body: String) -> NomsError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => NomsError::Auth(body),
        StatusCode::NOT_FOUND => NomsError::NotFound(body),
        StatusCode::CONFLICT => NomsError::AlreadySaved,
        StatusCode::UNPROCESSABLE_ENTITY => NomsError::Validation(body),
        _ => NomsError::Network(format!("API error {}: {}", status.as_u16(), body)),
    }
}

pub fn validate_search(
    lat: f64,
    lng: f64,
    radius_meters: u32,
    query: &str,
) -> NomsResult<()> {
    if !(-90.0..=90.0).contains(&lat) {
        return Err(NomsError::Validation(format!("latitude {} out of range", lat)));
    }
    if !(-180.0..=180.0).contains(&lng) {
        return Err(NomsError::Validation(format!("longitude {} out of range", lng)));
    }
    if !(MIN_SEARCH_RADIUS..=MAX_SEARCH_RADIUS).contains(&radius_meters) {
        return Err(NomsError::Validation(format!(
            "radius must be between {} and {} metres, got {}",
            MIN_SEARCH_RADIUS, MAX_SEARCH_RADIUS, radius_meters
        )));
    }
    if query.trim().is_empty() {
        return Err(NomsError::Validation("search query must not be empty".to_string()));
    }
    Ok(())
}

#[async_trait]
impl SearchService for ApiClient {
    async fn search_nearby(
        &self,
        lat: f64,
        lng: f64,
        radius_meters: u32,
        query: &str,
    ) -> NomsResult<Vec<Place>> {
        validate_search(lat, lng, radius_meters, query)?;

        let request = self.http.get(self.url(&["api", "places", "search"])).query(&[
            ("q", query.to_string()),
            ("lat", lat.to_string()),
            ("lng", lng.to_string()),
            ("radius", radius_meters.to_string()),
        ]);
        let response: PlaceSearchResponse = self.send_json(request).await?;

        let total = response.places.len();
        let places: Vec<Place> = response
            .places
            .into_iter()
            .filter_map(PlaceResult::into_place)
            .collect();
        if places.len() < total {
            warn!("Dropped {} search results without a location", total - places.len());
        }
        debug!("Search around {}, {} returned {} places", lat, lng, places.len());

        Ok(places)
    }
}

#[async_trait]
impl PlaceDetailsService for ApiClient {
    async fn place_details(&self, place_id: &str) -> NomsResult<PlaceDetails> {
        let request = self.http.get(self.url(&["api", "places", place_id]));
        self.send_json(request).await
    }
}

#[async_trait]
impl SavedPlacesService for ApiClient {
    async fn save_place(&self, place_id: &str) -> NomsResult<SavedPlace> {
        let body = SavePlaceRequest {
            google_place_id: place_id.to_string(),
            list_id: None,
        };
        let request = self.http.post(self.url(&["api", "saves", ""])).json(&body);
        self.send_json(request).await
    }

    async fn list_saved(&self) -> NomsResult<Vec<SavedPlace>> {
        let request = self.http.get(self.url(&["api", "saves", ""]));
        let response: SavedPlacesResponse = self.send_json(request).await?;
        Ok(response.places)
    }

    async fn unsave(&self, save_id: &str) -> NomsResult<()> {
        let request = self.http.delete(self.url(&["api", "saves", save_id]));
        self.send_empty(request).await
    }
}

#[async_trait]
impl JournalService for ApiClient {
    async fn list_entries(&self) -> NomsResult<Vec<JournalEntry>> {
        let request = self.http.get(self.url(&["api", "journal", ""]));
        let response: JournalEntriesResponse = self.send_json(request).await?;
        Ok(response.entries)
    }

    async fn create_entry(&self, entry: &CreateJournalEntry) -> NomsResult<JournalEntry> {
        entry.validate()?;
        let request = self.http.post(self.url(&["api", "journal", ""])).json(entry);
        self.send_json(request).await
    }

    async fn update_entry(&self, entry_id: &str, update: &UpdateJournalEntry) -> NomsResult<JournalEntry> {
        update.validate()?;
        let request = self
            .http
            .patch(self.url(&["api", "journal", entry_id]))
            .json(update);
        self.send_json(request).await
    }

    async fn delete_entry(&self, entry_id: &str) -> NomsResult<()> {
        let request = self.http.delete(self.url(&["api", "journal", entry_id]));
        self.send_empty(request).await
    }
}
