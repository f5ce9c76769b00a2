use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use crate::error::{NomsError, NomsResult};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct JournalEntry {
    pub id: String,
    pub photo_url: String,
    pub place_id: Option<String>,
    pub google_place_id: Option<String>,
    pub place_name: Option<String>,
    pub rating: Option<u8>,
    pub note: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub eaten_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct JournalEntriesResponse {
    pub entries: Vec<JournalEntry>,
    pub count: usize,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct CreateJournalEntry {
    pub photo_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_place_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// The backend stamps "now" when absent.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "time::serde::rfc3339::option")]
    pub eaten_at: Option<OffsetDateTime>,
}

impl CreateJournalEntry {
    pub fn validate(&self) -> NomsResult<()> {
        if self.photo_url.trim().is_empty() {
            return Err(NomsError::Validation("a photo is required".to_string()));
        }
        validate_rating(self.rating)
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct UpdateJournalEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl UpdateJournalEntry {
    pub fn validate(&self) -> NomsResult<()> {
        validate_rating(self.rating)
    }
}

fn validate_rating(rating: Option<u8>) -> NomsResult<()> {
    match rating {
        Some(r) if !(1..=5).contains(&r) => {
            Err(NomsError::Validation(format!("rating must be between 1 and 5, got {}", r)))
        }
        _ => Ok(()),
    }
}
