use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct PhotoUploadResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PhotoUploadResult {
    pub fn uploaded(url: String) -> Self {
        Self { success: true, url: Some(url), error: None }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self { success: false, url: None, error: Some(error.into()) }
    }
}
