use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use super::meeting::MeetingRecord;

/// Severity of a compliance finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

// The analysis pipeline has emitted "Low", "LOW" and "low" across
// versions; accept any casing.
impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.to_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            other => Err(serde::de::Error::custom(format!(
                "unknown severity: {}",
                other
            ))),
        }
    }
}

/// Compliance report artifact written by the analysis pipeline.
///
/// Read-only on this side. The pipeline writes snake_case fields and its
/// payload has varied across versions, so the optional metadata fields
/// accept both casings and unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport {
    /// Overall severity of the findings
    pub severity: Severity,
    /// Ordered list of compliance issues found
    #[serde(alias = "issues_found")]
    pub issues_found: Vec<String>,
    /// Narrative summary of the analysis
    pub summary: String,
    /// Model used by the analysis pipeline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// When the pipeline produced the report
    #[serde(
        default,
        alias = "processed_at",
        skip_serializing_if = "Option::is_none"
    )]
    pub processed_at: Option<DateTime<Utc>>,
    /// Pipeline request identifier
    #[serde(default, alias = "request_id", skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Whether guardrails were active during analysis
    #[serde(
        default,
        alias = "guardrails_enabled",
        skip_serializing_if = "Option::is_none"
    )]
    pub guardrails_enabled: Option<bool>,
}

/// Response when a report is available
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportReadyResponse {
    pub success: bool,
    pub report: ComplianceReport,
    pub meeting: MeetingRecord,
}

/// Response while a report is still being produced
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportPendingResponse {
    pub success: bool,
    pub message: String,
    pub meeting: MeetingRecord,
}
