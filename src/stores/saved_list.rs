use tokio::sync::Mutex;
use tracing::warn;
use crate::error::{NomsError, NomsResult};
use crate::models::saved_place::SavedPlace;
use crate::repositories::SavedPlacesService;

/// Saved places, most recently saved first.
#[derive(Clone, Debug, Default)]
pub struct SavedList {
    places: Vec<SavedPlace>,
}

impl SavedList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn places(&self) -> &[SavedPlace] {
        &self.places
    }

    pub fn replace(&mut self, places: Vec<SavedPlace>) {
        self.places = places;
    }

    pub fn prepend(&mut self, place: SavedPlace) {
        self.places.retain(|p| p.id != place.id);
        self.places.insert(0, place);
    }

    pub fn remove(&mut self, save_id: &str) {
        self.places.retain(|p| p.id != save_id);
    }
}

pub async fn refresh<S>(list: &Mutex<SavedList>, service: &S) -> NomsResult<Vec<SavedPlace>>
where
    S: SavedPlacesService + ?Sized,
{
    let places = service.list_saved().await?;
    list.lock().await.replace(places.clone());
    Ok(places)
}

/// Already-saved places count as saved.
pub async fn save<S>(list: &Mutex<SavedList>, service: &S, place_id: &str) -> bool
where
    S: SavedPlacesService + ?Sized,
{
    match service.save_place(place_id).await {
        Ok(saved) => {
            list.lock().await.prepend(saved);
            true
        }
        Err(NomsError::AlreadySaved) => true,
        Err(e) => {
            warn!("Failed to save place {} due to: {}", place_id, e);
            false
        }
    }
}

pub async fn unsave<S>(list: &Mutex<SavedList>, service: &S, save_id: &str) -> bool
where
    S: SavedPlacesService + ?Sized,
{
    match service.unsave(save_id).await {
        Ok(_) => {
            list.lock().await.remove(save_id);
            true
        }
        Err(e) => {
            warn!("Failed to unsave {} due to: {}", save_id, e);
            false
        }
    }
}
