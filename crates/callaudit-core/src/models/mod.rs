//! Data models for the application
//!
//! This module contains all data structures used throughout the application,
//! organized by domain. Each sub-module represents a specific feature area.

mod meeting;
mod report;
mod upload_grant;

// Re-export all models for convenient imports
pub use meeting::*;
pub use report::*;
pub use upload_grant::*;
