//! Photo uploads.

use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, header::CONTENT_TYPE};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

/// A photo received from a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoUpload {
    /// Original file name
    pub file_name: String,

    /// MIME type, when the client sent one
    pub content_type: Option<String>,

    /// File contents
    pub bytes: Vec<u8>,
}

/// Stores photo bytes and returns the public URL they are served from.
#[automock]
#[async_trait]
pub trait PhotoUploader: Send + Sync {
    /// Uploads a photo for an item of `collection`.
    async fn upload(&self, collection: &str, photo: PhotoUpload) -> Result<String, PhotoUploadError>;
}

/// Configuration for the blob store photos are uploaded to.
#[derive(Debug, Clone)]
pub struct PhotoStoreConfig {
    /// Base URL objects are `PUT` to, e.g. `"http://localhost:9000/photos"`.
    pub endpoint: String,

    /// Base URL objects are served from.
    pub public_url: String,

    /// Bearer token sent with uploads.
    pub token: Option<String>,
}

/// Uploads photos with an HTTP `PUT` per object.
#[derive(Debug, Clone)]
pub struct HttpPhotoUploader {
    config: PhotoStoreConfig,
    http: Client,
}

impl HttpPhotoUploader {
    /// Create a new uploader from the given configuration.
    #[must_use]
    pub fn new(config: PhotoStoreConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl PhotoUploader for HttpPhotoUploader {
    async fn upload(&self, collection: &str, photo: PhotoUpload) -> Result<String, PhotoUploadError> {
        let key = object_key(collection, &photo.file_name);
        let url = format!("{}/{key}", self.config.endpoint.trim_end_matches('/'));

        let mut request = self.http.put(&url).body(photo.bytes);

        if let Some(content_type) = &photo.content_type {
            request = request.header(CONTENT_TYPE, content_type);
        }

        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(PhotoUploadError::UnexpectedResponse(format!(
                "upload failed with status {status}: {text}"
            )));
        }

        debug!(%key, "uploaded photo");

        Ok(format!(
            "{}/{key}",
            self.config.public_url.trim_end_matches('/')
        ))
    }
}

/// Uploader used when no photo store is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledPhotoUploader;

#[async_trait]
impl PhotoUploader for DisabledPhotoUploader {
    async fn upload(&self, _collection: &str, _photo: PhotoUpload) -> Result<String, PhotoUploadError> {
        Err(PhotoUploadError::NotConfigured)
    }
}

/// Builds a unique object key that keeps the file's base name.
///
/// The base name is reduced to ASCII letters, digits, `.`, `-` and `_`, so the
/// key can be used as a URL path segment as is.
fn object_key(collection: &str, file_name: &str) -> String {
    let base_name: String = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '-'
            }
        })
        .collect();

    let base_name = if base_name.trim_matches(['.', '-']).is_empty() {
        "photo"
    } else {
        base_name.as_str()
    };

    format!("{collection}/{}-{base_name}", Uuid::now_v7().simple())
}

/// Errors that can occur when uploading photos.
#[derive(Debug, Error)]
pub enum PhotoUploadError {
    /// No photo store is configured.
    #[error("photo store is not configured")]
    NotConfigured,

    /// An HTTP transport error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The blob store returned a non-2xx response.
    #[error("unexpected response from photo store: {0}")]
    UnexpectedResponse(String),
}
