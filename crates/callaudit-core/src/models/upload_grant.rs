use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to obtain a presigned upload URL
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlRequest {
    /// Original file name of the recording
    #[validate(length(
        min = 1,
        max = 255,
        message = "File name must be between 1 and 255 characters"
    ))]
    pub file_name: String,
    /// Content type (MIME type) the client will send with the PUT
    #[validate(length(
        min = 1,
        max = 255,
        message = "File type must be between 1 and 255 characters"
    ))]
    pub file_type: String,
}

/// A single-use grant for uploading one recording directly to storage.
///
/// Not persisted; it exists for one upload round-trip and doubles as the
/// HTTP response body.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadGrant {
    /// Presigned PUT URL scoped to exactly the object key
    pub upload_url: String,
    /// Derived stored file name the client must register after uploading
    pub file_name: String,
    /// Full object key the grant is scoped to
    pub object_key: String,
    /// Instant after which the grant must not be honored
    pub expires_at: DateTime<Utc>,
    /// Provenance headers the client sends with the PUT
    pub metadata: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_grant_serializes_camel_case() {
        let mut metadata = BTreeMap::new();
        metadata.insert(
            "x-amz-meta-upload-type".to_string(),
            "compliance-recording".to_string(),
        );
        let grant = UploadGrant {
            upload_url: "https://example.com/signed".to_string(),
            file_name: "1748770000000-call.mp3".to_string(),
            object_key: "audio/1748770000000-call.mp3".to_string(),
            expires_at: Utc::now(),
            metadata,
        };
        let json = serde_json::to_value(&grant).unwrap();
        assert!(json.get("uploadUrl").is_some());
        assert!(json.get("fileName").is_some());
        assert!(json.get("objectKey").is_some());
        assert!(json.get("expiresAt").is_some());
        assert_eq!(
            json["metadata"]["x-amz-meta-upload-type"],
            "compliance-recording"
        );
    }

    #[test]
    fn test_upload_request_rejects_empty_file_name() {
        let request = UploadUrlRequest {
            file_name: "".to_string(),
            file_type: "audio/mpeg".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
