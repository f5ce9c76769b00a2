use serde::{Deserialize, Serialize};
use crate::models::place::Location;

/// City-level viewport span, roughly a 1 km radius.
pub const DEFAULT_DELTA: f64 = 0.01;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Map viewport centred on a coordinate.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct Region {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Region {
    pub fn around(coordinates: Coordinates) -> Self {
        Self {
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
            latitude_delta: DEFAULT_DELTA,
            longitude_delta: DEFAULT_DELTA,
        }
    }
}

impl From<Location> for Coordinates {
    fn from(location: Location) -> Self {
        Self {
            latitude: location.lat,
            longitude: location.lng,
        }
    }
}
