//! Configuration module
//!
//! This module provides configuration structures for the API and services,
//! including storage, registry, and upload grant settings.

use std::env;

use crate::storage_types::StorageBackend;

// Common constants
const DEFAULT_PORT: u16 = 4000;
const DEFAULT_REGISTRY_PATH: &str = "data/meetings.json";
const DEFAULT_GRANT_EXPIRY_SECS: u64 = 3600;
const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Base configuration shared across components
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
}

/// Service configuration for the compliance audit API
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub base: BaseConfig,
    // Storage configuration
    pub storage_backend: Option<StorageBackend>,
    pub upload_bucket: Option<String>,
    pub report_bucket: Option<String>,
    pub s3_region: Option<String>,
    pub s3_endpoint: Option<String>, // Custom endpoint for S3-compatible providers (MinIO, etc.)
    pub aws_region: Option<String>,
    pub local_storage_path: Option<String>,
    // Registry configuration
    pub registry_path: String,
    // Upload grant configuration
    pub upload_grant_expiry_secs: u64,
    pub max_body_bytes: usize,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config(pub Box<ServiceConfig>);

impl Config {
    fn as_service(&self) -> &ServiceConfig {
        &self.0
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        self.as_service()
            .base
            .environment
            .to_lowercase()
            .eq("production")
            || self.as_service().base.environment.to_lowercase().eq("prod")
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        let config = ServiceConfig::from_env()?;
        Ok(Config(Box::new(config)))
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.as_service().validate()
    }

    // Convenience getters for common fields
    pub fn server_port(&self) -> u16 {
        self.as_service().base.server_port
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.as_service().base.cors_origins
    }

    pub fn environment(&self) -> &str {
        &self.as_service().base.environment
    }

    pub fn storage_backend(&self) -> Option<StorageBackend> {
        self.as_service().storage_backend
    }

    pub fn upload_bucket(&self) -> Option<&str> {
        self.as_service().upload_bucket.as_deref()
    }

    pub fn report_bucket(&self) -> Option<&str> {
        self.as_service().report_bucket.as_deref()
    }

    pub fn s3_region(&self) -> Option<&str> {
        self.as_service().s3_region.as_deref()
    }

    pub fn s3_endpoint(&self) -> Option<&str> {
        self.as_service().s3_endpoint.as_deref()
    }

    pub fn aws_region(&self) -> Option<&str> {
        self.as_service().aws_region.as_deref()
    }

    pub fn local_storage_path(&self) -> Option<&str> {
        self.as_service().local_storage_path.as_deref()
    }

    pub fn registry_path(&self) -> &str {
        &self.as_service().registry_path
    }

    pub fn upload_grant_expiry_secs(&self) -> u64 {
        self.as_service().upload_grant_expiry_secs
    }

    pub fn max_body_bytes(&self) -> usize {
        self.as_service().max_body_bytes
    }
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());
        let is_production =
            environment.to_lowercase() == "production" || environment.to_lowercase() == "prod";
        if is_production && cors_origins_str.trim() == "*" {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let base = BaseConfig {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            cors_origins,
            environment,
        };

        // Storage backend configuration
        let storage_backend =
            env::var("STORAGE_BACKEND")
                .ok()
                .and_then(|s| match s.to_lowercase().as_str() {
                    "s3" => Some(StorageBackend::S3),
                    "local" => Some(StorageBackend::Local),
                    _ => None,
                });

        let config = ServiceConfig {
            base,
            storage_backend,
            upload_bucket: env::var("UPLOAD_BUCKET").ok().filter(|s| !s.is_empty()),
            report_bucket: env::var("REPORT_BUCKET").ok().filter(|s| !s.is_empty()),
            s3_region: env::var("S3_REGION").ok(),
            s3_endpoint: env::var("S3_ENDPOINT").ok(),
            aws_region: env::var("AWS_REGION").ok(),
            local_storage_path: env::var("LOCAL_STORAGE_PATH").ok(),
            registry_path: env::var("REGISTRY_PATH")
                .unwrap_or_else(|_| DEFAULT_REGISTRY_PATH.to_string()),
            upload_grant_expiry_secs: env::var("UPLOAD_GRANT_EXPIRY_SECS")
                .unwrap_or_else(|_| DEFAULT_GRANT_EXPIRY_SECS.to_string())
                .parse()
                .unwrap_or(DEFAULT_GRANT_EXPIRY_SECS),
            max_body_bytes: env::var("MAX_BODY_BYTES")
                .unwrap_or_else(|_| DEFAULT_MAX_BODY_BYTES.to_string())
                .parse()
                .unwrap_or(DEFAULT_MAX_BODY_BYTES),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        // Validate storage backend configuration
        let backend = self.storage_backend.unwrap_or(StorageBackend::S3);
        match backend {
            StorageBackend::S3 => {
                if self.upload_bucket.is_none() {
                    return Err(anyhow::anyhow!(
                        "UPLOAD_BUCKET must be set when using S3 storage backend"
                    ));
                }
                if self.report_bucket.is_none() {
                    return Err(anyhow::anyhow!(
                        "REPORT_BUCKET must be set when using S3 storage backend"
                    ));
                }
                if self.s3_region.is_none() && self.aws_region.is_none() {
                    return Err(anyhow::anyhow!(
                        "S3_REGION or AWS_REGION must be set when using S3 storage backend"
                    ));
                }
            }
            StorageBackend::Local => {
                if self.local_storage_path.is_none() {
                    return Err(anyhow::anyhow!(
                        "LOCAL_STORAGE_PATH must be set when using local storage backend"
                    ));
                }
            }
        }

        if self.registry_path.trim().is_empty() {
            return Err(anyhow::anyhow!("REGISTRY_PATH must not be empty"));
        }

        if self.upload_grant_expiry_secs == 0 {
            return Err(anyhow::anyhow!(
                "UPLOAD_GRANT_EXPIRY_SECS must be greater than zero"
            ));
        }

        Ok(())
    }
}
