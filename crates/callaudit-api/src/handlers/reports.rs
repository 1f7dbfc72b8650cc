use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use callaudit_core::models::{ReportPendingResponse, ReportReadyResponse};
use callaudit_core::AppError;
use callaudit_services::ReportResolution;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

/// Fetch the compliance report for a meeting.
///
/// A pending report is a normal outcome rendered as 202 so polling clients
/// can keep waiting; transient store faults surface as recoverable 500s.
#[utoipa::path(
    get,
    path = "/reports/{meeting_id}",
    tag = "reports",
    params(
        ("meeting_id" = Uuid, Path, description = "Meeting identifier")
    ),
    responses(
        (status = 200, description = "Report is ready", body = ReportReadyResponse),
        (status = 202, description = "Report is not ready yet", body = ReportPendingResponse),
        (status = 404, description = "Meeting not found", body = ErrorResponse),
        (status = 500, description = "Report store fault", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state),
    fields(meeting_id = %meeting_id, operation = "get_report")
)]
pub async fn get_report(
    State(state): State<Arc<AppState>>,
    Path(meeting_id): Path<Uuid>,
) -> Result<Response, HttpAppError> {
    match state.resolver.resolve(meeting_id).await? {
        ReportResolution::Ready { report, meeting } => Ok((
            StatusCode::OK,
            Json(ReportReadyResponse {
                success: true,
                report,
                meeting,
            }),
        )
            .into_response()),

        ReportResolution::NotReady { meeting } => Ok((
            StatusCode::ACCEPTED,
            Json(ReportPendingResponse {
                success: false,
                message: "Report is not ready yet. The analysis pipeline may still be processing this recording.".to_string(),
                meeting,
            }),
        )
            .into_response()),

        ReportResolution::NotFound => Err(HttpAppError(AppError::NotFound(format!(
            "Meeting not found: {}",
            meeting_id
        )))),

        ReportResolution::TransientError { message } => {
            Err(HttpAppError(AppError::Storage(message)))
        }
    }
}
