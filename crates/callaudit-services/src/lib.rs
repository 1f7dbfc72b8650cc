//! Callaudit Services Layer
//!
//! This crate is the **business service layer**: it hosts the upload broker
//! and report resolver and re-exports the storage and registry APIs so the
//! API crate depends on a single service facade. Keep business logic and
//! coordination here; keep thin HTTP handling in callaudit-api.

pub mod broker;
pub mod resolver;

pub use broker::UploadBroker;
pub use resolver::{ReportResolution, ReportResolver};

pub use callaudit_registry::{MeetingRegistry, RegistryError, RegistryResult};
pub use callaudit_storage::{
    create_storage, LocalStorage, S3Storage, Storage, StorageBackend, StorageError, StorageResult,
    StorageRole,
};
