use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Meeting lifecycle status
///
/// Only `Completed` is persisted today; report availability is tracked by
/// the resolver, not by this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MeetingStatus {
    Completed,
}

/// A registered meeting recording.
///
/// Records are append-only: once inserted into the registry they are never
/// mutated. Display fields are derived from `created_at` at construction.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeetingRecord {
    /// Unique meeting ID
    pub id: Uuid,
    /// Stored file name of the uploaded recording
    pub source_file_name: String,
    /// Registration instant
    pub created_at: DateTime<Utc>,
    /// Registration date for display (UTC, YYYY-MM-DD)
    pub display_date: String,
    /// Registration time for display (UTC, HH:MM)
    pub display_time: String,
    /// Lifecycle status
    pub status: MeetingStatus,
}

impl MeetingRecord {
    pub fn new(source_file_name: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            source_file_name,
            display_date: created_at.format("%Y-%m-%d").to_string(),
            display_time: created_at.format("%H:%M").to_string(),
            created_at,
            status: MeetingStatus::Completed,
        }
    }
}

/// Request to register an uploaded recording as a meeting
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterMeetingRequest {
    /// Stored file name returned by the upload grant
    #[validate(length(
        min = 1,
        max = 255,
        message = "File name must be between 1 and 255 characters"
    ))]
    pub file_name: String,
}

/// Response after registering a meeting
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterMeetingResponse {
    pub success: bool,
    pub meeting: MeetingRecord,
}

/// Response listing all registered meetings, most recent first
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeetingListResponse {
    pub meetings: Vec<MeetingRecord>,
}
