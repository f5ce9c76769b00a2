#![allow(dead_code)]

use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tower::ServiceExt;
use noms_now::controller::{AppState, SearchSettings};
use noms_now::error::{NomsError, NomsResult};
use noms_now::models::coordinates::Coordinates;
use noms_now::models::journal::{CreateJournalEntry, JournalEntry, UpdateJournalEntry};
use noms_now::models::place::{Location, Place, PlaceDetails};
use noms_now::models::saved_place::SavedPlace;
use noms_now::repositories::location_provider::FixedLocationProvider;
use noms_now::repositories::storage_client::object_path_in_bucket;
use noms_now::repositories::{
    JournalService, PhotoStorage, PlaceDetailsService, SavedPlacesService, SearchService,
};
use noms_now::session::NowSession;
use noms_now::stores::{JournalLog, SavedList};

pub fn place(id: &str, rating: Option<f64>) -> Place {
    Place {
        google_place_id: id.to_string(),
        name: format!("Place {}", id),
        address: Some(format!("{} Orchard Road", id)),
        location: Location { lat: 1.30, lng: 103.83 },
        rating,
    }
}

pub fn entry(id: &str) -> JournalEntry {
    JournalEntry {
        id: id.to_string(),
        photo_url: format!("https://cdn/journal-photos/u1/{}.jpg", id),
        place_id: None,
        google_place_id: None,
        place_name: None,
        rating: Some(4),
        note: None,
        eaten_at: OffsetDateTime::UNIX_EPOCH,
        created_at: OffsetDateTime::UNIX_EPOCH,
    }
}

/// In-memory stand-in for the REST backend.
pub struct FakeBackend {
    pub places: Vec<Place>,
    pub search_error: Option<NomsError>,
    pub failing_saves: Vec<String>,
    /// Saves for these ids never complete.
    pub hanging_saves: Vec<String>,
    pub saved: StdMutex<Vec<SavedPlace>>,
    pub entries: StdMutex<Vec<JournalEntry>>,
    pub delete_fails: bool,
    pub searches: StdMutex<Vec<(f64, f64, u32, String)>>,
}

impl FakeBackend {
    pub fn with_places(places: Vec<Place>) -> Self {
        Self {
            places,
            search_error: None,
            failing_saves: Vec::new(),
            hanging_saves: Vec::new(),
            saved: StdMutex::new(Vec::new()),
            entries: StdMutex::new(vec![entry("e1"), entry("e2")]),
            delete_fails: false,
            searches: StdMutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl SearchService for FakeBackend {
    async fn search_nearby(&self, lat: f64, lng: f64, radius_meters: u32, query: &str) -> NomsResult<Vec<Place>> {
        self.searches.lock().unwrap().push((lat, lng, radius_meters, query.to_string()));
        match &self.search_error {
            Some(e) => Err(e.clone()),
            None => Ok(self.places.clone()),
        }
    }
}

#[async_trait]
impl PlaceDetailsService for FakeBackend {
    async fn place_details(&self, place_id: &str) -> NomsResult<PlaceDetails> {
        let place = self
            .places
            .iter()
            .find(|p| p.google_place_id == place_id)
            .ok_or_else(|| NomsError::NotFound(place_id.to_string()))?;

        Ok(PlaceDetails {
            id: None,
            google_place_id: place.google_place_id.clone(),
            name: place.name.clone(),
            address: place.address.clone(),
            location: Some(place.location),
            photo_reference: None,
            types: vec!["restaurant".to_string()],
            rating: place.rating,
            price_level: Some(2),
            open_now: Some(true),
            website: None,
            phone_number: Some("+65 6000 0000".to_string()),
            hours: None,
        })
    }
}

#[async_trait]
impl SavedPlacesService for FakeBackend {
    async fn save_place(&self, place_id: &str) -> NomsResult<SavedPlace> {
        if self.hanging_saves.iter().any(|id| id == place_id) {
            std::future::pending::<()>().await;
        }
        if self.failing_saves.iter().any(|id| id == place_id) {
            return Err(NomsError::Network("connection reset".to_string()));
        }
        let mut saved = self.saved.lock().unwrap();
        if saved.iter().any(|s| s.google_place_id == place_id) {
            return Err(NomsError::AlreadySaved);
        }
        let record = SavedPlace {
            id: format!("save-{}", place_id),
            place_id: format!("uuid-{}", place_id),
            google_place_id: place_id.to_string(),
            name: format!("Place {}", place_id),
            address: None,
            photo_reference: None,
            saved_at: OffsetDateTime::UNIX_EPOCH,
            list_id: None,
        };
        saved.insert(0, record.clone());
        Ok(record)
    }

    async fn list_saved(&self) -> NomsResult<Vec<SavedPlace>> {
        Ok(self.saved.lock().unwrap().clone())
    }

    async fn unsave(&self, save_id: &str) -> NomsResult<()> {
        let mut saved = self.saved.lock().unwrap();
        let before = saved.len();
        saved.retain(|s| s.id != save_id);
        if saved.len() == before {
            return Err(NomsError::NotFound("Saved place not found".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl JournalService for FakeBackend {
    async fn list_entries(&self) -> NomsResult<Vec<JournalEntry>> {
        Ok(self.entries.lock().unwrap().clone())
    }

    async fn create_entry(&self, request: &CreateJournalEntry) -> NomsResult<JournalEntry> {
        let mut created = entry("e-new");
        created.photo_url = request.photo_url.clone();
        created.rating = request.rating;
        created.note = request.note.clone();
        self.entries.lock().unwrap().insert(0, created.clone());
        Ok(created)
    }

    async fn update_entry(&self, entry_id: &str, update: &UpdateJournalEntry) -> NomsResult<JournalEntry> {
        let mut entries = self.entries.lock().unwrap();
        let existing = entries
            .iter_mut()
            .find(|e| e.id == entry_id)
            .ok_or_else(|| NomsError::NotFound(entry_id.to_string()))?;
        if update.rating.is_some() {
            existing.rating = update.rating;
        }
        if update.note.is_some() {
            existing.note = update.note.clone();
        }
        Ok(existing.clone())
    }

    async fn delete_entry(&self, entry_id: &str) -> NomsResult<()> {
        if self.delete_fails {
            return Err(NomsError::Network("timeout".to_string()));
        }
        self.entries.lock().unwrap().retain(|e| e.id != entry_id);
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeStorage {
    pub objects: StdMutex<Vec<(String, String, usize)>>,
}

#[async_trait]
impl PhotoStorage for FakeStorage {
    async fn upload(&self, path: &str, content_type: &str, bytes: Vec<u8>) -> NomsResult<String> {
        self.objects.lock().unwrap().push((path.to_string(), content_type.to_string(), bytes.len()));
        Ok(format!("https://cdn/storage/v1/object/public/journal-photos/{}", path))
    }

    async fn delete(&self, path: &str) -> NomsResult<()> {
        self.objects.lock().unwrap().retain(|(p, _, _)| p != path);
        Ok(())
    }

    fn object_path(&self, public_url: &str) -> Option<String> {
        object_path_in_bucket(public_url, "journal-photos")
    }
}

pub struct Harness {
    pub app: Router,
    pub backend: Arc<FakeBackend>,
    pub storage: Arc<FakeStorage>,
}

pub fn harness(backend: FakeBackend, location: Option<Coordinates>, permission_granted: bool) -> Harness {
    let backend = Arc::new(backend);
    let storage = Arc::new(FakeStorage::default());
    let location = FixedLocationProvider::new(
        location.map(|c| c.latitude),
        location.map(|c| c.longitude),
        permission_granted,
    );

    let app_state = AppState {
        user_id: "u1".to_string(),
        search_settings: SearchSettings {
            radius_meters: 1000,
            query: "restaurant".to_string(),
        },
        location: Arc::new(location),
        search: backend.clone(),
        details: backend.clone(),
        saves: backend.clone(),
        journal: backend.clone(),
        photos: storage.clone(),
        now: Arc::new(Mutex::new(NowSession::new(Duration::from_millis(400)))),
        saved_list: Arc::new(Mutex::new(SavedList::new())),
        journal_log: Arc::new(Mutex::new(JournalLog::new())),
    };

    Harness {
        app: noms_now::controller::router_endpoints(app_state),
        backend,
        storage,
    }
}

pub fn singapore() -> Option<Coordinates> {
    Some(Coordinates { latitude: 1.3048, longitude: 103.8318 })
}

pub fn call(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> impl std::future::Future<Output = (StatusCode, Value)> + Send + 'static {
    let app = app.clone();
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json_body) => request
            .header("content-type", "application/json")
            .body(Body::from(json_body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    async move {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let json_body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json_body)
    }
}
