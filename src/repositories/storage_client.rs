//! Journal photo uploads to the object-storage service.

use std::time::Duration;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::json;
use time::OffsetDateTime;
use tracing::{info, warn};
use crate::error::{NomsError, NomsResult};
use crate::models::photo::PhotoUploadResult;
use crate::repositories::api_client::error_for_status;
use crate::repositories::PhotoStorage;

const DEFAULT_EXTENSION: &str = "jpg";

#[derive(Clone)]
pub struct StorageClient {
    http: reqwest::Client,
    storage_url: String,
    bucket: String,
    token: Option<String>,
}

impl StorageClient {
    pub fn new(
        storage_url: impl Into<String>,
        bucket: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> NomsResult<Self> {
        Ok(Self {
            http: reqwest::Client::builder().timeout(timeout).build()?,
            storage_url: storage_url.into().trim_end_matches('/').to_string(),
            bucket: bucket.into(),
            token,
        })
    }

    pub fn public_url(&self, path: &str) -> String {
        format!("{}/storage/v1/object/public/{}/{}", self.storage_url, self.bucket, path)
    }

    fn bearer(&self) -> NomsResult<String> {
        self.token
            .as_deref()
            .map(|token| format!("Bearer {}", token))
            .ok_or_else(|| NomsError::Auth("Not authenticated".to_string()))
    }
}

#[async_trait]
impl PhotoStorage for StorageClient {
    async fn upload(&self, path: &str, content_type: &str, bytes: Vec<u8>) -> NomsResult<String> {
        let url = format!("{}/storage/v1/object/{}/{}", self.storage_url, self.bucket, path);
        let response = self
            .http
            .post(url)
            .header(AUTHORIZATION, self.bearer()?)
            .header(CONTENT_TYPE, content_type)
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status, body));
        }

        Ok(self.public_url(path))
    }

    async fn delete(&self, path: &str) -> NomsResult<()> {
        let url = format!("{}/storage/v1/object/{}", self.storage_url, self.bucket);
        let response = self
            .http
            .delete(url)
            .header(AUTHORIZATION, self.bearer()?)
            .json(&json!({ "prefixes": [path] }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status, body));
        }
        Ok(())
    }

    fn object_path(&self, public_url: &str) -> Option<String> {
        object_path_in_bucket(public_url, &self.bucket)
    }
}

/// Lower-cased suffix after the last `.` of the source name.
pub fn extension_of(source_name: &str) -> String {
    source_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .filter(|ext| !ext.is_empty() && !ext.contains('/'))
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
}

/// `{user_id}/{timestamp_ms}.{ext}`
pub fn object_path(user_id: &str, timestamp_ms: i128, source_name: &str) -> String {
    format!("{}/{}.{}", user_id, timestamp_ms, extension_of(source_name))
}

pub fn content_type_for(extension: &str) -> String {
    format!("image/{}", extension)
}

pub fn object_path_in_bucket(public_url: &str, bucket: &str) -> Option<String> {
    let marker = format!("/{}/", bucket);
    public_url
        .split_once(marker.as_str())
        .map(|(_, path)| path.to_string())
        .filter(|path| !path.is_empty())
}

/// Uploads a picked or captured photo under the user's folder.
pub async fn upload_photo<S>(
    storage: &S,
    user_id: &str,
    source_name: &str,
    bytes: Vec<u8>,
) -> PhotoUploadResult
where
    S: PhotoStorage + ?Sized,
{
    let timestamp_ms = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    let path = object_path(user_id, timestamp_ms, source_name);
    let content_type = content_type_for(&extension_of(source_name));

    match storage.upload(&path, &content_type, bytes).await {
        Ok(url) => {
            info!("Uploaded journal photo to {}", path);
            PhotoUploadResult::uploaded(url)
        }
        Err(e) => {
            warn!("Photo upload failed due to: {}", e);
            PhotoUploadResult::failed(e.to_string())
        }
    }
}

/// Returns false when the URL is not one of ours or the removal fails.
pub async fn delete_photo<S>(storage: &S, public_url: &str) -> bool
where
    S: PhotoStorage + ?Sized,
{
    let Some(path) = storage.object_path(public_url) else {
        return false;
    };

    match storage.delete(&path).await {
        Ok(_) => true,
        Err(e) => {
            warn!("Failed to delete photo {} due to: {}", path, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use super::*;

    #[test]
    fn object_paths_use_lowercase_extension() {
        assert_eq!(object_path("u1", 1700000000000, "IMG_0042.HEIC"), "u1/1700000000000.heic");
        assert_eq!(object_path("u1", 5, "capture"), "u1/5.jpg");
        assert_eq!(content_type_for("png"), "image/png");
    }

    #[test]
    fn extracts_path_after_bucket() {
        let client =
            StorageClient::new("https://xyz.storage.dev/", "journal-photos", None, Duration::from_secs(1)).unwrap();
        let url = client.public_url("u1/5.jpg");

        assert_eq!(url, "https://xyz.storage.dev/storage/v1/object/public/journal-photos/u1/5.jpg");
        assert_eq!(client.object_path(&url).as_deref(), Some("u1/5.jpg"));
        assert_eq!(client.object_path("https://elsewhere.dev/p.jpg"), None);
    }

    struct MemoryStorage {
        fail: bool,
        uploads: Mutex<Vec<(String, String)>>,
        deleted: Mutex<Vec<String>>,
    }

    impl MemoryStorage {
        fn new(fail: bool) -> Self {
            Self { fail, uploads: Mutex::new(Vec::new()), deleted: Mutex::new(Vec::new()) }
        }
    }

    #[async_trait]
    impl PhotoStorage for MemoryStorage {
        async fn upload(&self, path: &str, content_type: &str, _bytes: Vec<u8>) -> NomsResult<String> {
            if self.fail {
                return Err(NomsError::Network("bucket unreachable".to_string()));
            }
            self.uploads.lock().unwrap().push((path.to_string(), content_type.to_string()));
            Ok(format!("https://cdn/journal-photos/{}", path))
        }

        async fn delete(&self, path: &str) -> NomsResult<()> {
            self.deleted.lock().unwrap().push(path.to_string());
            Ok(())
        }

        fn object_path(&self, public_url: &str) -> Option<String> {
            object_path_in_bucket(public_url, "journal-photos")
        }
    }

    #[tokio::test]
    async fn upload_reports_public_url() {
        let storage = MemoryStorage::new(false);
        let result = upload_photo(&storage, "u1", "lunch.PNG", vec![1, 2, 3]).await;

        assert!(result.success);
        let (path, content_type) = storage.uploads.lock().unwrap()[0].clone();
        assert!(path.starts_with("u1/") && path.ends_with(".png"));
        assert_eq!(content_type, "image/png");
        assert_eq!(result.url, Some(format!("https://cdn/journal-photos/{}", path)));
    }

    #[tokio::test]
    async fn upload_failure_is_reported_not_raised() {
        let storage = MemoryStorage::new(true);
        let result = upload_photo(&storage, "u1", "lunch.jpg", vec![]).await;
        assert!(!result.success);
        assert!(result.error.unwrap().contains("bucket unreachable"));
    }

    #[tokio::test]
    async fn foreign_urls_are_not_deleted() {
        let storage = MemoryStorage::new(false);
        assert!(!delete_photo(&storage, "https://other.host/photo.jpg").await);
        assert!(delete_photo(&storage, "https://cdn/journal-photos/u1/5.jpg").await);
        assert_eq!(*storage.deleted.lock().unwrap(), vec!["u1/5.jpg".to_string()]);
    }
}
