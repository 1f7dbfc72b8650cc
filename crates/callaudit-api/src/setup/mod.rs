//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from
//! main.rs for better organization and testability.

pub mod routes;
pub mod server;
pub mod storage;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{
    fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use callaudit_core::Config;
use callaudit_services::{MeetingRegistry, ReportResolver, UploadBroker};

use crate::state::AppState;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config
        .validate()
        .context("Configuration validation failed")?;

    init_tracing();
    tracing::info!("Configuration loaded and validated successfully");

    // Setup storage
    let (upload_store, report_store) = storage::setup_storage(&config).await?;

    // Setup registry and services
    let registry = Arc::new(MeetingRegistry::new(config.registry_path()));
    let broker = UploadBroker::new(upload_store, config.upload_grant_expiry_secs());
    let resolver = ReportResolver::new(registry.clone(), report_store);

    let state = Arc::new(AppState {
        registry,
        broker,
        resolver,
    });

    // Setup routes
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}

fn init_tracing() {
    let console_fmt = tracing_subscriber::fmt::layer().event_format(
        Format::default()
            .compact()
            .with_target(false)
            .without_time(),
    );
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "callaudit=debug,tower_http=debug".into()),
        )
        .with(console_fmt)
        .init();
}
