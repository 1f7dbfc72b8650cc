use crate::{LocalStorage, S3Storage, Storage, StorageBackend, StorageError, StorageResult};
use callaudit_core::Config;
use std::sync::Arc;

/// Which store a storage client is built for.
///
/// Uploaded recordings and compliance reports live in separate buckets;
/// the analysis pipeline writes to the report bucket on its own schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageRole {
    Upload,
    Report,
}

/// Create a storage backend for the given role based on configuration
pub async fn create_storage(role: StorageRole, config: &Config) -> StorageResult<Arc<dyn Storage>> {
    let backend = config.storage_backend().unwrap_or(StorageBackend::S3);

    match backend {
        StorageBackend::S3 => {
            let bucket = match role {
                StorageRole::Upload => config.upload_bucket().map(String::from).ok_or_else(|| {
                    StorageError::ConfigError("UPLOAD_BUCKET not configured".to_string())
                })?,
                StorageRole::Report => config.report_bucket().map(String::from).ok_or_else(|| {
                    StorageError::ConfigError("REPORT_BUCKET not configured".to_string())
                })?,
            };
            let region = config
                .s3_region()
                .map(String::from)
                .or_else(|| config.aws_region().map(String::from))
                .ok_or_else(|| {
                    StorageError::ConfigError("S3_REGION or AWS_REGION not configured".to_string())
                })?;
            let endpoint = config.s3_endpoint().map(String::from);

            let storage = S3Storage::new(bucket, region, endpoint)?;
            Ok(Arc::new(storage))
        }

        StorageBackend::Local => {
            let base_path = config
                .local_storage_path()
                .map(String::from)
                .ok_or_else(|| {
                    StorageError::ConfigError("LOCAL_STORAGE_PATH not configured".to_string())
                })?;

            let storage = LocalStorage::new(base_path).await?;
            Ok(Arc::new(storage))
        }
    }
}
