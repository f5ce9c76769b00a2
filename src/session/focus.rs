use std::time::Duration;
use serde::Serialize;
use crate::models::coordinates::{Coordinates, Region};
use crate::models::place::{Place, PlaceId};

/// Instruction for the map to re-centre on a new candidate.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FocusChange {
    pub place_id: PlaceId,
    pub region: Region,
    pub duration_ms: u64,
}

/// Effect keyed on the current candidate's identifier.
#[derive(Clone, Debug)]
pub struct MapFocus {
    focused: Option<PlaceId>,
    duration_ms: u64,
}

impl MapFocus {
    /// Durations beyond `u64::MAX` milliseconds saturate.
    pub fn new(duration: Duration) -> Self {
        Self {
            focused: None,
            duration_ms: u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
        }
    }

    pub fn observe(&mut self, candidate: Option<&Place>) -> Option<FocusChange> {
        let Some(place) = candidate else {
            self.focused = None;
            return None;
        };

        if self.focused.as_deref() == Some(place.id()) {
            return None;
        }

        self.focused = Some(place.google_place_id.clone());
        Some(FocusChange {
            place_id: place.google_place_id.clone(),
            region: Region::around(Coordinates::from(place.location)),
            duration_ms: self.duration_ms,
        })
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }
}
