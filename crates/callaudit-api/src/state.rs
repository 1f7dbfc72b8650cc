//! Application state shared across handlers.

use std::sync::Arc;

use callaudit_services::{MeetingRegistry, ReportResolver, UploadBroker};

/// Shared application state. Handlers receive it via `State<Arc<AppState>>`.
pub struct AppState {
    pub registry: Arc<MeetingRegistry>,
    pub broker: UploadBroker,
    pub resolver: ReportResolver,
}
