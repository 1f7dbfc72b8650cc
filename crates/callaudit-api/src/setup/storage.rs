//! Storage setup and initialization

use std::sync::Arc;

use anyhow::Result;

use callaudit_core::Config;
use callaudit_services::{create_storage, Storage, StorageRole};

/// Create the upload and report stores for the configured backend.
pub async fn setup_storage(config: &Config) -> Result<(Arc<dyn Storage>, Arc<dyn Storage>)> {
    tracing::info!("Initializing storage abstraction...");

    let upload_store = create_storage(StorageRole::Upload, config).await?;
    let report_store = create_storage(StorageRole::Report, config).await?;

    tracing::info!(
        backend = ?upload_store.backend_type(),
        "Storage abstraction initialized successfully"
    );

    Ok((upload_store, report_store))
}
