//! Object storage backend for media uploads.
//!
//! The database only records upload metadata; bytes go to an S3-compatible
//! endpoint over plain HTTP PUT. A trait seam keeps handlers testable
//! without a running storage service.

use async_trait::async_trait;

/// Storage backend failures, mapped to 500 by the error layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Storage rejected upload with status {0}")]
    UnexpectedStatus(u16),
}

/// Uploads objects and resolves their public URLs.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store `bytes` at `object_path` within the configured bucket.
    async fn put(
        &self,
        object_path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), StorageError>;

    /// Public URL serving the object at `object_path`.
    fn public_url(&self, object_path: &str) -> String;
}

// ---------------------------------------------------------------------------
// HTTP-backed implementation
// ---------------------------------------------------------------------------

/// Stores objects via HTTP PUT against an S3-compatible endpoint.
pub struct HttpObjectStorage {
    client: reqwest::Client,
    base_url: String,
    bucket: String,
}

impl HttpObjectStorage {
    pub fn new(base_url: impl Into<String>, bucket: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            bucket: bucket.into(),
        }
    }

    fn object_url(&self, object_path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.bucket,
            object_path
        )
    }
}

#[async_trait]
impl ObjectStorage for HttpObjectStorage {
    async fn put(
        &self,
        object_path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), StorageError> {
        let response = self
            .client
            .put(self.object_url(object_path))
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(StorageError::UnexpectedStatus(response.status().as_u16()));
        }
        Ok(())
    }

    fn public_url(&self, object_path: &str) -> String {
        self.object_url(object_path)
    }
}

// ---------------------------------------------------------------------------
// In-memory implementation (tests)
// ---------------------------------------------------------------------------

/// Keeps uploaded objects in a map. Used by integration tests.
#[derive(Default)]
pub struct MemoryStorage {
    objects: std::sync::Mutex<std::collections::HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.objects.lock().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fetch a stored object's bytes, if present.
    pub fn get(&self, object_path: &str) -> Option<Vec<u8>> {
        self.objects
            .lock()
            .ok()
            .and_then(|m| m.get(object_path).cloned())
    }
}

#[async_trait]
impl ObjectStorage for MemoryStorage {
    async fn put(
        &self,
        object_path: &str,
        _content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), StorageError> {
        if let Ok(mut objects) = self.objects.lock() {
            objects.insert(object_path.to_string(), bytes);
        }
        Ok(())
    }

    fn public_url(&self, object_path: &str) -> String {
        format!("memory://{object_path}")
    }
}
