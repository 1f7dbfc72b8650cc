//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must implement.

use crate::StorageBackend;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Signing failed: {0}")]
    SignFailed(String),

    #[error("Fetch failed: {0}")]
    FetchFailed(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// All storage backends (S3, local filesystem) must implement this trait.
/// The upload broker and report resolver work against this interface
/// without coupling to a specific backend.
///
/// Keys must not contain `..` or a leading `/`. Key derivation is
/// centralized in callaudit-core so both sides of the pipeline agree on
/// object locations.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Generate a presigned PUT URL for a direct upload.
    ///
    /// Clients upload with HTTP PUT to the returned URL. Only supported by
    /// S3 backends; other backends return a `ConfigError`.
    async fn presigned_put_url(
        &self,
        storage_key: &str,
        content_type: &str,
        expires_in: Duration,
    ) -> StorageResult<String>;

    /// Fetch an object's bytes by its storage key.
    ///
    /// A missing object is reported as `StorageError::NotFound`, distinct
    /// from transient backend faults.
    async fn fetch(&self, storage_key: &str) -> StorageResult<Vec<u8>>;

    /// Check if an object exists
    async fn exists(&self, storage_key: &str) -> StorageResult<bool>;

    /// Write an object to a specific storage key.
    ///
    /// Used by tests and tooling to seed stores; the upload broker never
    /// moves bytes itself.
    async fn put(&self, storage_key: &str, data: Vec<u8>, content_type: &str)
        -> StorageResult<()>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
