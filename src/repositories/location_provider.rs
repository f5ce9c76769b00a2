use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};
use crate::error::{NomsError, NomsResult};
use crate::models::coordinates::{Coordinates, Region};
use crate::repositories::LocationProvider;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionStatus {
    Granted,
    Denied,
    Undetermined,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accuracy {
    High,
    Balanced,
}

/// Resolves the device position, falling back to balanced accuracy when a
/// high accuracy fix cannot be obtained.
pub async fn locate<P>(provider: &P) -> NomsResult<Region>
where
    P: LocationProvider + ?Sized,
{
    if provider.request_permission().await != PermissionStatus::Granted {
        return Err(NomsError::PermissionDenied);
    }

    let coordinates = match provider.current_position(Accuracy::High).await {
        Ok(coordinates) => coordinates,
        Err(e) => {
            warn!("High accuracy location failed due to: {}, falling back to balanced", e);
            provider.current_position(Accuracy::Balanced).await?
        }
    };

    debug!("Located device at {}, {}", coordinates.latitude, coordinates.longitude);
    Ok(Region::around(coordinates))
}

/// Location source backed by configured coordinates.
pub struct FixedLocationProvider {
    coordinates: Option<Coordinates>,
    permission_granted: bool,
}

impl FixedLocationProvider {
    pub fn new(
        latitude: Option<f64>,
        longitude: Option<f64>,
        permission_granted: bool,
    ) -> Self {
        let coordinates = match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates { latitude, longitude }),
            _ => None,
        };

        Self {
            coordinates,
            permission_granted,
        }
    }
}

#[async_trait]
impl LocationProvider for FixedLocationProvider {
    async fn request_permission(&self) -> PermissionStatus {
        if self.permission_granted {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        }
    }

    async fn current_position(&self, _accuracy: Accuracy) -> NomsResult<Coordinates> {
        self.coordinates.ok_or(NomsError::LocationUnavailable)
    }
}
