//! Report resolver
//!
//! Looks up a meeting, derives where its compliance report should live,
//! and classifies the fetch outcome. The resolver is stateless per call;
//! retry and backoff policy belongs to the polling client.

use std::sync::Arc;

use uuid::Uuid;

use callaudit_core::keys::report_object_key;
use callaudit_core::models::{ComplianceReport, MeetingRecord};
use callaudit_core::AppError;
use callaudit_registry::MeetingRegistry;
use callaudit_storage::{Storage, StorageError};

/// Outcome of resolving a meeting's compliance report.
///
/// NotReady is an expected state while the analysis pipeline is still
/// working, distinct from TransientError so polling clients can apply
/// different backoff and alerting policy.
#[derive(Debug)]
pub enum ReportResolution {
    Ready {
        report: ComplianceReport,
        meeting: MeetingRecord,
    },
    NotReady {
        meeting: MeetingRecord,
    },
    NotFound,
    TransientError {
        message: String,
    },
}

/// Resolves compliance reports from the report store.
pub struct ReportResolver {
    registry: Arc<MeetingRegistry>,
    report_store: Arc<dyn Storage>,
}

impl ReportResolver {
    pub fn new(registry: Arc<MeetingRegistry>, report_store: Arc<dyn Storage>) -> Self {
        Self {
            registry,
            report_store,
        }
    }

    /// Resolve the report for a meeting.
    ///
    /// The error covers registry I/O failures only; all store-classified
    /// outcomes are inside `ReportResolution`.
    pub async fn resolve(&self, meeting_id: Uuid) -> Result<ReportResolution, AppError> {
        let meeting = self
            .registry
            .find_by_id(meeting_id)
            .await
            .map_err(|e| AppError::Registry(e.to_string()))?;

        let Some(meeting) = meeting else {
            return Ok(ReportResolution::NotFound);
        };

        let report_key = report_object_key(&meeting.source_file_name);

        match self.report_store.fetch(&report_key).await {
            Ok(bytes) => match serde_json::from_slice::<ComplianceReport>(&bytes) {
                Ok(report) => {
                    tracing::info!(
                        meeting_id = %meeting_id,
                        report_key = %report_key,
                        "Compliance report resolved"
                    );
                    Ok(ReportResolution::Ready { report, meeting })
                }
                Err(e) => {
                    tracing::warn!(
                        meeting_id = %meeting_id,
                        report_key = %report_key,
                        error = %e,
                        "Compliance report artifact is malformed"
                    );
                    Ok(ReportResolution::TransientError {
                        message: format!("Report artifact is malformed: {}", e),
                    })
                }
            },
            Err(StorageError::NotFound(_)) => Ok(ReportResolution::NotReady { meeting }),
            Err(e) => {
                tracing::error!(
                    meeting_id = %meeting_id,
                    report_key = %report_key,
                    error = %e,
                    "Report store fetch failed"
                );
                Ok(ReportResolution::TransientError {
                    message: e.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use callaudit_core::StorageBackend;
    use callaudit_storage::{LocalStorage, StorageResult};
    use std::time::Duration;
    use tempfile::tempdir;

    async fn setup(dir: &tempfile::TempDir) -> (Arc<MeetingRegistry>, Arc<LocalStorage>) {
        let registry = Arc::new(MeetingRegistry::new(dir.path().join("meetings.json")));
        let store = Arc::new(LocalStorage::new(dir.path().join("store")).await.unwrap());
        (registry, store)
    }

    #[tokio::test]
    async fn test_unknown_meeting_is_not_found() {
        let dir = tempdir().unwrap();
        let (registry, store) = setup(&dir).await;
        let resolver = ReportResolver::new(registry, store);

        let resolution = resolver.resolve(Uuid::new_v4()).await.unwrap();
        assert!(matches!(resolution, ReportResolution::NotFound));
    }

    #[tokio::test]
    async fn test_missing_artifact_is_not_ready() {
        let dir = tempdir().unwrap();
        let (registry, store) = setup(&dir).await;
        let meeting = registry.append("1-call.mp3".to_string()).await.unwrap();
        let resolver = ReportResolver::new(registry, store);

        let resolution = resolver.resolve(meeting.id).await.unwrap();
        match resolution {
            ReportResolution::NotReady { meeting: m } => assert_eq!(m.id, meeting.id),
            other => panic!("expected NotReady, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_seeded_artifact_is_ready() {
        let dir = tempdir().unwrap();
        let (registry, store) = setup(&dir).await;
        let meeting = registry.append("1-call.mp3".to_string()).await.unwrap();

        let artifact = r#"{
            "severity": "High",
            "issues_found": ["undisclosed fee"],
            "summary": "One issue detected."
        }"#;
        store
            .put("audits/1-call.json", artifact.as_bytes().to_vec(), "application/json")
            .await
            .unwrap();

        let resolver = ReportResolver::new(registry, store);
        let resolution = resolver.resolve(meeting.id).await.unwrap();
        match resolution {
            ReportResolution::Ready { report, meeting: m } => {
                assert_eq!(m.id, meeting.id);
                assert_eq!(report.issues_found.len(), 1);
            }
            other => panic!("expected Ready, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_artifact_is_transient() {
        let dir = tempdir().unwrap();
        let (registry, store) = setup(&dir).await;
        let meeting = registry.append("1-call.mp3".to_string()).await.unwrap();

        store
            .put("audits/1-call.json", b"not json".to_vec(), "application/json")
            .await
            .unwrap();

        let resolver = ReportResolver::new(registry, store);
        let resolution = resolver.resolve(meeting.id).await.unwrap();
        assert!(matches!(resolution, ReportResolution::TransientError { .. }));
    }

    struct BrokenStore;

    #[async_trait]
    impl Storage for BrokenStore {
        async fn presigned_put_url(
            &self,
            _storage_key: &str,
            _content_type: &str,
            _expires_in: Duration,
        ) -> StorageResult<String> {
            Err(StorageError::ConfigError("unsupported".to_string()))
        }

        async fn fetch(&self, _storage_key: &str) -> StorageResult<Vec<u8>> {
            Err(StorageError::FetchFailed("connection reset".to_string()))
        }

        async fn exists(&self, _storage_key: &str) -> StorageResult<bool> {
            Err(StorageError::FetchFailed("connection reset".to_string()))
        }

        async fn put(
            &self,
            _storage_key: &str,
            _data: Vec<u8>,
            _content_type: &str,
        ) -> StorageResult<()> {
            Err(StorageError::FetchFailed("connection reset".to_string()))
        }

        fn backend_type(&self) -> StorageBackend {
            StorageBackend::S3
        }
    }

    #[tokio::test]
    async fn test_store_fault_is_transient() {
        let dir = tempdir().unwrap();
        let registry = Arc::new(MeetingRegistry::new(dir.path().join("meetings.json")));
        let meeting = registry.append("1-call.mp3".to_string()).await.unwrap();

        let resolver = ReportResolver::new(registry, Arc::new(BrokenStore));
        let resolution = resolver.resolve(meeting.id).await.unwrap();
        assert!(matches!(resolution, ReportResolution::TransientError { .. }));
    }
}
