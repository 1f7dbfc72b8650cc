//! Callaudit Meeting Registry
//!
//! Append-only record store for registered meeting recordings, backed by a
//! single JSON array file. Appends are serialized through a mutex and each
//! persist writes to a temporary file before an atomic rename, so
//! concurrent appends cannot lose records and a crash mid-write cannot
//! corrupt the file.

use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use uuid::Uuid;

use callaudit_core::models::MeetingRecord;

/// Registry operation errors
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Registry IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Registry serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// File-backed registry of meeting records, most recent first.
pub struct MeetingRegistry {
    path: PathBuf,
    // Single-owner append lock; reads stay lock-free against the last
    // durable file state.
    write_lock: Mutex<()>,
}

impl MeetingRegistry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Register an uploaded recording and return the new record.
    ///
    /// The record is inserted at the head of the collection and the whole
    /// collection is persisted before returning.
    pub async fn append(&self, source_file_name: String) -> RegistryResult<MeetingRecord> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.load().await?;
        let record = MeetingRecord::new(source_file_name, Utc::now());
        records.insert(0, record.clone());
        self.persist(&records).await?;

        tracing::info!(
            meeting_id = %record.id,
            source_file_name = %record.source_file_name,
            total_records = records.len(),
            "Meeting registered"
        );

        Ok(record)
    }

    /// All records in stored order (most recent first).
    pub async fn list_all(&self) -> RegistryResult<Vec<MeetingRecord>> {
        self.load().await
    }

    /// Find a record by meeting id. None is a normal outcome, not a fault.
    pub async fn find_by_id(&self, id: Uuid) -> RegistryResult<Option<MeetingRecord>> {
        let records = self.load().await?;
        Ok(records.into_iter().find(|r| r.id == id))
    }

    async fn load(&self) -> RegistryResult<Vec<MeetingRecord>> {
        let raw = match fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Registry file is unparseable, treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    async fn persist(&self, records: &[MeetingRecord]) -> RegistryResult<()> {
        if let Some(parent) = self.path.parent() {
            if parent != Path::new("") {
                fs::create_dir_all(parent).await?;
            }
        }

        let data = serde_json::to_vec_pretty(records)?;

        // Write to a sibling temp file first so the rename is atomic on the
        // same filesystem.
        let tmp_path = self.path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp_path).await?;
        file.write_all(&data).await?;
        file.sync_all().await?;
        drop(file);

        fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}
