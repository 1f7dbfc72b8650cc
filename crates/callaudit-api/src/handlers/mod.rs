//! HTTP request handlers

pub mod health;
pub mod meetings;
pub mod reports;
pub mod upload_url;
