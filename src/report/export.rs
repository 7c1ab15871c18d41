//! Tabular export of leave and correction records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::error::HrResult;
use crate::models::{Dataset, RequestStatus};

use super::filter::ReportFilter;

/// One export row. Corrections are normalized onto the leave columns:
/// their single date fills both start and end, days is 0 and leave_type
/// is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    /// "leave" or "attendance_correction".
    pub category: &'static str,
    /// Owner user id.
    pub employee_id: String,
    /// Denormalized owner name captured at creation.
    pub employee_name: String,
    /// Denormalized owner department captured at creation.
    pub department: String,
    /// Lifecycle state at export time.
    pub status: RequestStatus,
    /// Span start.
    pub start_date: NaiveDate,
    /// Span end.
    pub end_date: NaiveDate,
    /// Inclusive day count, 0 for corrections.
    pub days: i64,
    /// Leave type, "" for corrections.
    pub leave_type: String,
    /// Requester's reason.
    pub reason: String,
    /// Approver comment, "" until decided.
    pub approver_comment: String,
    /// Approver display name, "" until decided.
    pub approved_by: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Collects the export rows: records of any status whose span overlaps the
/// filter window, leave requests first, then corrections.
pub fn export_rows(data: &Dataset, filter: &ReportFilter) -> Vec<ExportRow> {
    let mut rows = Vec::new();

    for r in &data.leave_requests {
        if !filter.overlaps(&data.users, r) {
            continue;
        }
        rows.push(ExportRow {
            category: "leave",
            employee_id: r.user_id.clone(),
            employee_name: r.employee_name.clone(),
            department: r.department.clone(),
            status: r.status,
            start_date: r.start_date,
            end_date: r.end_date,
            days: r.days,
            leave_type: r.leave_type.clone(),
            reason: r.reason.clone(),
            approver_comment: r.approver_comment.clone(),
            approved_by: r.approved_by.clone(),
            created_at: r.created_at,
        });
    }

    for r in &data.attendance_corrections {
        if !filter.overlaps(&data.users, r) {
            continue;
        }
        rows.push(ExportRow {
            category: "attendance_correction",
            employee_id: r.user_id.clone(),
            employee_name: r.employee_name.clone(),
            department: r.department.clone(),
            status: r.status,
            start_date: r.date,
            end_date: r.date,
            days: 0,
            leave_type: String::new(),
            reason: r.reason.clone(),
            approver_comment: r.approver_comment.clone(),
            approved_by: r.approved_by.clone(),
            created_at: r.created_at,
        });
    }

    rows
}

/// Materializes export rows as CSV with a header row.
pub fn export_csv(rows: &[ExportRow]) -> HrResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| crate::error::HrError::internal(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| crate::error::HrError::internal(err.to_string()))
}
