//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p callaudit-api --test api_flow_test`
//! or `cargo test -p callaudit-api`.

use std::path::Path;
use std::sync::Arc;

use axum_test::TestServer;
use tempfile::TempDir;

use callaudit_api::setup::routes;
use callaudit_api::state::AppState;
use callaudit_core::{BaseConfig, Config, ServiceConfig, StorageBackend};
use callaudit_services::{LocalStorage, MeetingRegistry, ReportResolver, UploadBroker};

/// Test application: server and owned resources.
///
/// The report store is exposed so tests can seed compliance report
/// artifacts the way the analysis pipeline would.
pub struct TestApp {
    pub server: TestServer,
    pub registry: Arc<MeetingRegistry>,
    pub report_store: Arc<LocalStorage>,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

/// Setup test app with an isolated registry file and local storage.
///
/// Both the upload broker and the report resolver share one local store.
/// The local backend cannot sign upload URLs, which is exactly what the
/// upload grant error-path tests rely on.
pub async fn setup_test_app() -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");

    let store = Arc::new(
        LocalStorage::new(temp_dir.path().join("store"))
            .await
            .expect("Failed to create local storage"),
    );
    let registry = Arc::new(MeetingRegistry::new(temp_dir.path().join("meetings.json")));

    let broker = UploadBroker::new(store.clone(), 3600);
    let resolver = ReportResolver::new(registry.clone(), store.clone());

    let state = Arc::new(AppState {
        registry: registry.clone(),
        broker,
        resolver,
    });

    let config = create_test_config(temp_dir.path());
    let app = routes::setup_routes(&config, state).expect("Failed to setup routes");
    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    TestApp {
        server,
        registry,
        report_store: store,
        _temp_dir: temp_dir,
    }
}

fn create_test_config(base_path: &Path) -> Config {
    let base = BaseConfig {
        server_port: 4000,
        cors_origins: vec!["*".to_string()],
        environment: "test".to_string(),
    };
    Config(Box::new(ServiceConfig {
        base,
        storage_backend: Some(StorageBackend::Local),
        upload_bucket: None,
        report_bucket: None,
        s3_region: None,
        s3_endpoint: None,
        aws_region: None,
        local_storage_path: Some(base_path.join("store").to_string_lossy().into_owned()),
        registry_path: base_path.join("meetings.json").to_string_lossy().into_owned(),
        upload_grant_expiry_secs: 3600,
        max_body_bytes: 1024 * 1024,
    }))
}
