//! Per-session decision state for the swipe flow.
//!
//! A place leaves the active pool after any terminal decision (skip, save or
//! consider). The active pool is never stored: it is re-derived from the
//! place list on every read.

use std::collections::HashSet;
use tracing::{debug, warn};
use crate::error::{NomsError, NomsResult};
use crate::models::place::{Place, PlaceId};
use crate::models::saved_place::SavedPlace;
use crate::repositories::SavedPlacesService;
use crate::session::ranking::rank;

#[derive(Clone, Debug, Default)]
pub struct CandidateSession {
    skipped: HashSet<PlaceId>,
    saved: HashSet<PlaceId>,
    considering: Vec<Place>,
}

impl CandidateSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_candidates(&self, places: &[Place]) -> Vec<Place> {
        rank(places)
            .into_iter()
            .filter(|place| !self.skipped.contains(place.id()))
            .collect()
    }

    pub fn current_candidate(&self, places: &[Place]) -> Option<Place> {
        self.active_candidates(places).into_iter().next()
    }

    pub fn skip(&mut self, place: &Place) {
        self.skipped.insert(place.google_place_id.clone());
    }

    /// Persists the place through `service` and advances past it whatever the
    /// outcome. Returns whether the backend accepted the save; a place that
    /// was already saved counts as accepted.
    pub async fn save<S>(&mut self, place: &Place, service: &S) -> bool
    where
        S: SavedPlacesService + ?Sized,
    {
        self.begin_save(place);
        let outcome = service.save_place(place.id()).await;
        self.record_save_outcome(place.id(), &outcome)
    }

    /// Local half of a save: the place leaves the active pool immediately.
    pub fn begin_save(&mut self, place: &Place) {
        self.skip(place);
    }

    /// Mirrors the backend's answer once it arrives. Never rolls back the skip.
    pub fn record_save_outcome(&mut self, place_id: &str, outcome: &NomsResult<SavedPlace>) -> bool {
        match outcome {
            Ok(_) | Err(NomsError::AlreadySaved) => {
                self.saved.insert(place_id.to_string());
                true
            }
            Err(e) => {
                warn!("Failed to save place {} due to: {}", place_id, e);
                false
            }
        }
    }

    pub fn consider(&mut self, place: &Place) {
        if !self.is_considering(place.id()) {
            self.considering.push(place.clone());
        }
        self.skip(place);
    }

    /// The place stays out of the active pool.
    pub fn remove_from_considering(&mut self, place_id: &str) {
        self.considering.retain(|place| place.id() != place_id);
    }

    pub fn clear_considering(&mut self) {
        self.considering.clear();
    }

    pub fn reset(&mut self) {
        debug!(
            "Resetting session with {} skipped and {} considering",
            self.skipped.len(),
            self.considering.len()
        );
        self.skipped.clear();
        self.considering.clear();
    }

    pub fn is_skipped(&self, place_id: &str) -> bool {
        self.skipped.contains(place_id)
    }

    pub fn is_saved(&self, place_id: &str) -> bool {
        self.saved.contains(place_id)
    }

    pub fn is_considering(&self, place_id: &str) -> bool {
        self.considering.iter().any(|place| place.id() == place_id)
    }

    pub fn considering(&self) -> &[Place] {
        &self.considering
    }

    pub fn saved_ids(&self) -> Vec<PlaceId> {
        let mut ids: Vec<PlaceId> = self.saved.iter().cloned().collect();
        ids.sort();
        ids
    }
}
