//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use callaudit_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Callaudit API",
        version = "0.1.0",
        description = "Compliance call audit API. Issues presigned upload grants for meeting recordings, registers uploaded meetings, and serves compliance reports produced by the analysis pipeline."
    ),
    paths(
        handlers::upload_url::create_upload_url,
        handlers::meetings::list_meetings,
        handlers::meetings::register_meeting,
        handlers::reports::get_report,
        handlers::health::health_check,
    ),
    components(schemas(
        models::UploadUrlRequest,
        models::UploadGrant,
        models::RegisterMeetingRequest,
        models::RegisterMeetingResponse,
        models::MeetingListResponse,
        models::MeetingRecord,
        models::MeetingStatus,
        models::ComplianceReport,
        models::Severity,
        models::ReportReadyResponse,
        models::ReportPendingResponse,
        handlers::health::HealthResponse,
        error::ErrorResponse,
    )),
    tags(
        (name = "uploads", description = "Presigned upload grants"),
        (name = "meetings", description = "Meeting registry"),
        (name = "reports", description = "Compliance report retrieval"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;
