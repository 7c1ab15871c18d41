//! Request types for the HTTP API.
//!
//! Create payloads ([`crate::workflow::NewLeaveRequest`] and
//! [`crate::workflow::NewCorrection`]) live with the workflow since their
//! validation is workflow logic; the types here are the remaining
//! API-surface shapes. Fields default so that missing values surface as
//! domain validation errors rather than deserialization failures.

use serde::Deserialize;

/// Body of `POST /api/login`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    /// The id of the user logging in.
    #[serde(default)]
    pub user_id: String,
}

/// Query parameters for listing endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    /// Visibility scope, `mine` (default) or `team`.
    #[serde(default)]
    pub scope: Option<String>,
}

/// Body of `POST /api/approvals`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApprovalRequest {
    /// Target bucket, `leave` or `correction`.
    #[serde(default)]
    pub category: String,
    /// Id of the record to decide.
    #[serde(default)]
    pub id: String,
    /// `approved` or `rejected`.
    #[serde(default)]
    pub action: String,
    /// Approver comment, may be empty.
    #[serde(default)]
    pub comment: String,
}

/// Query parameters for the report endpoints. All optional; empty strings
/// count as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportParams {
    /// Window start, `YYYY-MM-DD`.
    #[serde(default)]
    pub start: Option<String>,
    /// Window end, `YYYY-MM-DD`.
    #[serde(default)]
    pub end: Option<String>,
    /// Department filter.
    #[serde(default)]
    pub department: Option<String>,
    /// Employee id filter.
    #[serde(default)]
    pub employee: Option<String>,
}
