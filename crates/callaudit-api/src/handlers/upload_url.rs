use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};

use callaudit_core::models::{UploadGrant, UploadUrlRequest};

use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;

/// Issue a presigned upload grant for one meeting recording.
///
/// The client PUTs the recording bytes directly to the granted URL; the
/// returned `fileName` is the stored name it must use when registering the
/// meeting afterwards.
#[utoipa::path(
    post,
    path = "/upload-url",
    tag = "uploads",
    request_body = UploadUrlRequest,
    responses(
        (status = 200, description = "Upload grant issued", body = UploadGrant),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 500, description = "Upload store is not configured for grants", body = ErrorResponse),
        (status = 502, description = "Grant signing failed", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state, request),
    fields(operation = "create_upload_url")
)]
pub async fn create_upload_url(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<UploadUrlRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let grant = state
        .broker
        .grant_upload(&request.file_name, &request.file_type)
        .await?;

    Ok(Json(grant))
}
