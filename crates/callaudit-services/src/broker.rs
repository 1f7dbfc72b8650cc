//! Upload broker
//!
//! Issues single-use presigned upload grants. The broker never moves bytes
//! itself; clients PUT directly to the store using the granted URL.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::{Duration, Utc};

use callaudit_core::keys::{stored_file_name, upload_object_key};
use callaudit_core::AppError;
use callaudit_core::models::UploadGrant;
use callaudit_storage::{Storage, StorageError};

/// Provenance metadata keys sent by the client with the PUT
const META_ORIGINAL_NAME: &str = "x-amz-meta-original-name";
const META_UPLOAD_TYPE: &str = "x-amz-meta-upload-type";
const META_ISSUED_AT: &str = "x-amz-meta-issued-at";

const UPLOAD_TYPE: &str = "compliance-recording";

/// Issues presigned upload grants against the upload store.
pub struct UploadBroker {
    storage: Arc<dyn Storage>,
    grant_expiry_secs: u64,
}

impl UploadBroker {
    pub fn new(storage: Arc<dyn Storage>, grant_expiry_secs: u64) -> Self {
        Self {
            storage,
            grant_expiry_secs,
        }
    }

    /// Issue an upload grant for one recording.
    ///
    /// Validates the file name, composes the object key and provenance
    /// metadata, and requests a presigned PUT URL scoped to exactly that
    /// key. No side effects: the registry is untouched until the client
    /// registers the upload.
    pub async fn grant_upload(
        &self,
        file_name: &str,
        content_type: &str,
    ) -> Result<UploadGrant, AppError> {
        let file_name = file_name.trim();
        if file_name.is_empty() {
            return Err(AppError::InvalidInput(
                "File name must not be empty".to_string(),
            ));
        }

        let issued_at = Utc::now();
        let object_key = upload_object_key(file_name, issued_at);
        let expires_at = issued_at + Duration::seconds(self.grant_expiry_secs as i64);

        let mut metadata = BTreeMap::new();
        metadata.insert(META_ORIGINAL_NAME.to_string(), file_name.to_string());
        metadata.insert(META_UPLOAD_TYPE.to_string(), UPLOAD_TYPE.to_string());
        metadata.insert(META_ISSUED_AT.to_string(), issued_at.to_rfc3339());

        let upload_url = self
            .storage
            .presigned_put_url(
                &object_key,
                content_type,
                StdDuration::from_secs(self.grant_expiry_secs),
            )
            .await
            .map_err(|e| match e {
                StorageError::ConfigError(msg) => AppError::Configuration(msg),
                other => AppError::Grant(other.to_string()),
            })?;

        tracing::info!(
            object_key = %object_key,
            expires_at = %expires_at,
            "Upload grant issued"
        );

        Ok(UploadGrant {
            upload_url,
            file_name: stored_file_name(&object_key).to_string(),
            object_key,
            expires_at,
            metadata,
        })
    }
}
