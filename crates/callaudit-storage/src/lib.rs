//! Callaudit Storage Library
//!
//! This crate provides storage abstraction and implementations for callaudit.
//! It includes the Storage trait and implementations for S3 and local filesystem.
//!
//! # Storage key format
//!
//! - **Uploaded recordings**: `audio/{epoch_millis}-{sanitized_name}`
//! - **Compliance reports**: `audits/{base_name}.json`
//!
//! Keys must not contain `..` or a leading `/`. Key derivation is
//! centralized in callaudit-core so all backends stay consistent.

pub mod factory;
pub mod local;
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use callaudit_core::StorageBackend;
pub use factory::{create_storage, StorageRole};
pub use local::LocalStorage;
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
