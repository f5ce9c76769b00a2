use serde::{Deserialize, Serialize};

/// Opaque external place identifier, stable across searches.
pub type PlaceId = String;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// A candidate restaurant as the session sees it.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Place {
    pub google_place_id: PlaceId,
    pub name: String,
    pub address: Option<String>,
    pub location: Location,
    pub rating: Option<f64>,
}

impl Place {
    pub fn id(&self) -> &str {
        &self.google_place_id
    }
}

/// Place record as returned by the search endpoint.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct PlaceResult {
    pub id: Option<String>,
    pub google_place_id: String,
    pub name: String,
    pub address: Option<String>,
    pub location: Option<Location>,
    pub photo_reference: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    pub rating: Option<f64>,
    pub price_level: Option<i64>,
    pub open_now: Option<bool>,
}

impl PlaceResult {
    /// Results without coordinates cannot be placed on the map.
    pub fn into_place(self) -> Option<Place> {
        let location = self.location?;
        Some(Place {
            google_place_id: self.google_place_id,
            name: self.name,
            address: self.address,
            location,
            rating: self.rating,
        })
    }
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct PlaceSearchResponse {
    pub places: Vec<PlaceResult>,
    pub count: usize,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct PlaceDetails {
    pub id: Option<String>,
    pub google_place_id: String,
    pub name: String,
    pub address: Option<String>,
    pub location: Option<Location>,
    pub photo_reference: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    pub rating: Option<f64>,
    pub price_level: Option<i64>,
    pub open_now: Option<bool>,
    pub website: Option<String>,
    pub phone_number: Option<String>,
    pub hours: Option<Vec<String>>,
}
