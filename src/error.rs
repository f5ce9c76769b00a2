//! Error taxonomy shared by the session engine, the outbound clients and the
//! local HTTP surface.

use axum::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NomsError {
    #[error("Location permission is required to find nearby restaurants.")]
    PermissionDenied,

    #[error("Unable to get your location")]
    LocationUnavailable,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    /// Not an error as far as the session is concerned.
    #[error("Already saved")]
    AlreadySaved,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    Validation(String),
}

impl NomsError {
    /// Status code used when the error reaches the presentation layer.
    pub fn status_code(&self) -> StatusCode {
        match self {
            NomsError::PermissionDenied | NomsError::LocationUnavailable => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            NomsError::Network(_) => StatusCode::BAD_GATEWAY,
            NomsError::Auth(_) => StatusCode::UNAUTHORIZED,
            NomsError::AlreadySaved => StatusCode::CONFLICT,
            NomsError::NotFound(_) => StatusCode::NOT_FOUND,
            NomsError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            NomsError::PermissionDenied => "permission_denied",
            NomsError::LocationUnavailable => "location_unavailable",
            NomsError::Network(_) => "network_error",
            NomsError::Auth(_) => "auth_error",
            NomsError::AlreadySaved => "already_saved",
            NomsError::NotFound(_) => "not_found",
            NomsError::Validation(_) => "validation_error",
        }
    }

    /// Location and search failures are shown to the user with a retry affordance.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            NomsError::PermissionDenied | NomsError::LocationUnavailable | NomsError::Network(_)
        )
    }
}

impl From<reqwest::Error> for NomsError {
    fn from(e: reqwest::Error) -> Self {
        NomsError::Network(e.to_string())
    }
}

pub type NomsResult<T> = Result<T, NomsError>;
