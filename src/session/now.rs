//! The single "now" browsing session owned by the app for one foreground
//! lifecycle: the current place list, the decision state and map focus.

use std::time::Duration;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, info};
use crate::error::NomsResult;
use crate::models::coordinates::Region;
use crate::models::place::{Place, PlaceId};
use crate::models::saved_place::SavedPlace;
use crate::repositories::SavedPlacesService;
use crate::session::engine::CandidateSession;
use crate::session::focus::{FocusChange, MapFocus};
use crate::session::gesture::Intent;

#[derive(Clone, Debug, Serialize)]
pub struct NowSnapshot {
    pub region: Option<Region>,
    pub current: Option<Place>,
    pub remaining: usize,
    pub considering: Vec<Place>,
    pub saved_ids: Vec<PlaceId>,
    pub focus: Option<FocusChange>,
}

#[derive(Debug)]
pub struct NowSession {
    region: Option<Region>,
    places: Vec<Place>,
    decisions: CandidateSession,
    focus: MapFocus,
}

impl NowSession {
    pub fn new(focus_duration: Duration) -> Self {
        Self {
            region: None,
            places: Vec::new(),
            decisions: CandidateSession::new(),
            focus: MapFocus::new(focus_duration),
        }
    }

    /// Swaps in a fresh search result. Decisions survive until `reset`.
    pub fn replace_places(&mut self, region: Region, places: Vec<Place>) {
        info!("Loaded {} places around {}, {}", places.len(), region.latitude, region.longitude);
        self.region = Some(region);
        self.places = places;
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn decisions(&self) -> &CandidateSession {
        &self.decisions
    }

    pub fn find(&self, place_id: &str) -> Option<Place> {
        self.places
            .iter()
            .chain(self.decisions.considering())
            .find(|place| place.id() == place_id)
            .cloned()
    }

    pub fn current_candidate(&self) -> Option<Place> {
        self.decisions.current_candidate(&self.places)
    }

    /// Applies the local half of a decision. Returns true when a save still
    /// has to be persisted and reported back through `record_save_outcome`.
    pub fn apply(&mut self, intent: Intent, place: &Place) -> bool {
        match intent {
            Intent::Skip => {
                self.decisions.skip(place);
                false
            }
            Intent::Consider => {
                self.decisions.consider(place);
                false
            }
            Intent::Save => {
                self.decisions.begin_save(place);
                true
            }
        }
    }

    pub fn record_save_outcome(&mut self, place_id: &str, outcome: &NomsResult<SavedPlace>) -> bool {
        self.decisions.record_save_outcome(place_id, outcome)
    }

    pub fn remove_from_considering(&mut self, place_id: &str) {
        self.decisions.remove_from_considering(place_id);
    }

    pub fn clear_considering(&mut self) {
        self.decisions.clear_considering();
    }

    pub fn reset(&mut self) {
        self.decisions.reset();
    }

    /// Reads the session and advances map focus if the candidate changed.
    pub fn snapshot(&mut self) -> NowSnapshot {
        let active = self.decisions.active_candidates(&self.places);
        let current = active.first().cloned();
        let focus = self.focus.observe(current.as_ref());

        NowSnapshot {
            region: self.region,
            current,
            remaining: active.len(),
            considering: self.decisions.considering().to_vec(),
            saved_ids: self.decisions.saved_ids(),
            focus,
        }
    }
}

/// Which place a decision applies to.
#[derive(Clone, Copy, Debug)]
pub enum Target<'a> {
    Place(&'a str),
    Current,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Decision {
    /// `None` when nothing was applied.
    pub intent: Option<Intent>,
    /// Set once a save has been answered.
    pub saved: Option<bool>,
}

/// Applies `intent` to `target`. The session lock is released while a save
/// is in flight, so reads and other decisions never wait on the backend.
pub async fn decide<S>(
    now: &Mutex<NowSession>,
    saves: &S,
    intent: Intent,
    target: Target<'_>,
) -> Decision
where
    S: SavedPlacesService + ?Sized,
{
    let pending_save = {
        let mut session = now.lock().await;
        let place = match target {
            Target::Place(place_id) => session.find(place_id),
            Target::Current => session.current_candidate(),
        };
        let Some(place) = place else {
            debug!("Ignoring {:?} for {:?}, no such place", intent, target);
            return Decision::default();
        };
        session.apply(intent, &place).then_some(place)
    };

    let Some(place) = pending_save else {
        return Decision { intent: Some(intent), saved: None };
    };

    let outcome = saves.save_place(place.id()).await;
    let saved = now.lock().await.record_save_outcome(place.id(), &outcome);
    Decision { intent: Some(intent), saved: Some(saved) }
}
