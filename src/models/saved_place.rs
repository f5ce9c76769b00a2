use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct SavePlaceRequest {
    pub google_place_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct SavedPlace {
    /// Identifier of the save itself, used to unsave.
    pub id: String,
    pub place_id: String,
    pub google_place_id: String,
    pub name: String,
    pub address: Option<String>,
    pub photo_reference: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub saved_at: OffsetDateTime,
    pub list_id: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct SavedPlacesResponse {
    pub places: Vec<SavedPlace>,
    pub count: usize,
}
