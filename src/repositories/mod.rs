//! Outbound collaborators: the REST backend, object storage and the device
//! location source. The session and stores only see the traits.

use async_trait::async_trait;
use crate::error::NomsResult;
use crate::models::coordinates::Coordinates;
use crate::models::journal::{CreateJournalEntry, JournalEntry, UpdateJournalEntry};
use crate::models::place::{Place, PlaceDetails};
use crate::models::saved_place::SavedPlace;

pub mod api_client;
pub mod location_provider;
pub mod storage_client;

pub use location_provider::{Accuracy, PermissionStatus};

#[async_trait]
pub trait SearchService: Send + Sync {
    async fn search_nearby(
        &self,
        lat: f64,
        lng: f64,
        radius_meters: u32,
        query: &str,
    ) -> NomsResult<Vec<Place>>;
}

#[async_trait]
pub trait PlaceDetailsService: Send + Sync {
    async fn place_details(&self, place_id: &str) -> NomsResult<PlaceDetails>;
}

#[async_trait]
pub trait SavedPlacesService: Send + Sync {
    /// Fails with `NomsError::AlreadySaved` when the place is already on the list.
    async fn save_place(&self, place_id: &str) -> NomsResult<SavedPlace>;

    async fn list_saved(&self) -> NomsResult<Vec<SavedPlace>>;

    async fn unsave(&self, save_id: &str) -> NomsResult<()>;
}

#[async_trait]
pub trait JournalService: Send + Sync {
    async fn list_entries(&self) -> NomsResult<Vec<JournalEntry>>;

    async fn create_entry(&self, entry: &CreateJournalEntry) -> NomsResult<JournalEntry>;

    async fn update_entry(&self, entry_id: &str, update: &UpdateJournalEntry) -> NomsResult<JournalEntry>;

    async fn delete_entry(&self, entry_id: &str) -> NomsResult<()>;
}

#[async_trait]
pub trait PhotoStorage: Send + Sync {
    /// Stores the object and returns its public URL.
    async fn upload(&self, path: &str, content_type: &str, bytes: Vec<u8>) -> NomsResult<String>;

    async fn delete(&self, path: &str) -> NomsResult<()>;

    /// Object path for a public URL issued by this storage, if it is one.
    fn object_path(&self, public_url: &str) -> Option<String>;
}

#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn request_permission(&self) -> PermissionStatus;

    async fn current_position(&self, accuracy: Accuracy) -> NomsResult<Coordinates>;
}
