//! Response types and error mapping for the HTTP API.
//!
//! Every body carries an `ok` flag. Errors add a human-readable message
//! and, for validation failures, the offending field names. Internal
//! failures are logged server-side and surfaced as a generic message with
//! no detail leakage.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::HrError;
use crate::models::{ApprovalRoute, Dataset, SettingsView, User, WorkCalendar};
use crate::report::SummaryReport;

/// API error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Always false.
    pub ok: bool,
    /// Human-readable error message.
    pub message: String,
    /// Offending field names, present for per-field validation errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

impl ApiError {
    /// Creates an error body with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            fields: None,
        }
    }

    /// Creates an error body listing the offending fields.
    pub fn with_fields(message: impl Into<String>, fields: Vec<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            fields: Some(fields),
        }
    }
}

/// API error with its HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates an error response with the given status and message.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            error: ApiError::new(message),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<HrError> for ApiErrorResponse {
    fn from(error: HrError) -> Self {
        match error {
            HrError::Unauthenticated => {
                Self::new(StatusCode::UNAUTHORIZED, HrError::Unauthenticated.to_string())
            }
            HrError::Unauthorized { message } => Self::new(StatusCode::FORBIDDEN, message),
            HrError::Forbidden { message } => Self::new(StatusCode::FORBIDDEN, message),
            HrError::Validation { message, fields } => Self {
                status: StatusCode::BAD_REQUEST,
                error: if fields.is_empty() {
                    ApiError::new(message)
                } else {
                    ApiError::with_fields(message, fields)
                },
            },
            HrError::NotFound { what } => {
                Self::new(StatusCode::NOT_FOUND, format!("{what} not found"))
            }
            // Never expose the underlying failure to clients.
            HrError::Internal { .. } => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error. Please retry.",
            ),
        }
    }
}

/// Body of `GET /api/meta`.
#[derive(Debug, Clone, Serialize)]
pub struct MetaResponse {
    /// Always true.
    pub ok: bool,
    /// All known users.
    pub users: Vec<User>,
    /// Configured leave type labels.
    pub leave_types: Vec<String>,
    /// Working calendar configuration.
    pub work_calendar: WorkCalendar,
    /// Department-to-manager approval routes.
    pub approval_routes: Vec<ApprovalRoute>,
}

impl MetaResponse {
    /// Builds the metadata view of a dataset.
    pub fn new(data: &Dataset) -> Self {
        Self {
            ok: true,
            users: data.users.clone(),
            leave_types: data.leave_types.clone(),
            work_calendar: data.work_calendar.clone(),
            approval_routes: data.approval_routes.clone(),
        }
    }
}

/// Body of `POST /api/login`.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    /// Always true.
    pub ok: bool,
    /// The resolved user record.
    pub user: User,
}

/// Body wrapping a single created or updated record.
#[derive(Debug, Clone, Serialize)]
pub struct ItemResponse<T> {
    /// Always true.
    pub ok: bool,
    /// The record.
    pub item: T,
}

impl<T> ItemResponse<T> {
    /// Wraps a record.
    pub fn new(item: T) -> Self {
        Self { ok: true, item }
    }
}

/// Body wrapping a listing result.
#[derive(Debug, Clone, Serialize)]
pub struct ItemsResponse<T> {
    /// Always true.
    pub ok: bool,
    /// The visible records.
    pub items: Vec<T>,
}

impl<T> ItemsResponse<T> {
    /// Wraps a listing.
    pub fn new(items: Vec<T>) -> Self {
        Self { ok: true, items }
    }
}

/// Body of `GET /api/reports`.
#[derive(Debug, Clone, Serialize)]
pub struct ReportResponse {
    /// Always true.
    pub ok: bool,
    /// The summary report.
    pub report: SummaryReport,
}

/// Body of `POST /api/settings`.
#[derive(Debug, Clone, Serialize)]
pub struct SettingsResponse {
    /// Always true.
    pub ok: bool,
    /// The settings after the update.
    pub settings: SettingsView,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization_skips_absent_fields() {
        let error = ApiError::new("Unknown user");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"ok\":false"));
        assert!(json.contains("\"message\":\"Unknown user\""));
        assert!(!json.contains("fields"));
    }

    #[test]
    fn test_api_error_with_fields_serialization() {
        let error =
            ApiError::with_fields("Missing fields", vec!["start_date".to_string()]);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"fields\":[\"start_date\"]"));
    }

    #[test]
    fn test_status_mapping() {
        let cases: Vec<(HrError, StatusCode)> = vec![
            (HrError::Unauthenticated, StatusCode::UNAUTHORIZED),
            (HrError::unauthorized("x"), StatusCode::FORBIDDEN),
            (HrError::forbidden("x"), StatusCode::FORBIDDEN),
            (HrError::validation("x"), StatusCode::BAD_REQUEST),
            (HrError::not_found("Request"), StatusCode::NOT_FOUND),
            (HrError::internal("disk on fire"), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (error, expected) in cases {
            let response: ApiErrorResponse = error.into();
            assert_eq!(response.status, expected);
        }
    }

    #[test]
    fn test_internal_error_detail_not_leaked() {
        let response: ApiErrorResponse = HrError::internal("disk on fire").into();
        assert!(!response.error.message.contains("disk"));
        assert_eq!(response.error.message, "Internal server error. Please retry.");
    }

    #[test]
    fn test_meta_response_mirrors_dataset() {
        let data = Dataset::seed();
        let meta = MetaResponse::new(&data);
        assert!(meta.ok);
        assert_eq!(meta.users.len(), 5);
        assert_eq!(meta.leave_types, data.leave_types);
    }
}
