use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};

use callaudit_core::models::{
    MeetingListResponse, RegisterMeetingRequest, RegisterMeetingResponse,
};
use callaudit_core::AppError;

use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;

/// List all registered meetings, most recent first
#[utoipa::path(
    get,
    path = "/meetings",
    tag = "meetings",
    responses(
        (status = 200, description = "Registered meetings", body = MeetingListResponse),
        (status = 500, description = "Registry read failed", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "list_meetings"))]
pub async fn list_meetings(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let meetings = state.registry.list_all().await?;

    Ok(Json(MeetingListResponse { meetings }))
}

/// Register an uploaded recording as a meeting
#[utoipa::path(
    post,
    path = "/meetings",
    tag = "meetings",
    request_body = RegisterMeetingRequest,
    responses(
        (status = 200, description = "Meeting registered", body = RegisterMeetingResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 500, description = "Registry write failed", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state, request),
    fields(operation = "register_meeting")
)]
pub async fn register_meeting(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<RegisterMeetingRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let file_name = request.file_name.trim();
    if file_name.is_empty() {
        return Err(HttpAppError(AppError::InvalidInput(
            "fileName must not be empty".to_string(),
        )));
    }

    let meeting = state.registry.append(file_name.to_string()).await?;

    Ok(Json(RegisterMeetingResponse {
        success: true,
        meeting,
    }))
}
