//! Approvable request records.
//!
//! This module defines the two request kinds — [`LeaveRequest`] and
//! [`AttendanceCorrection`] — and the [`Approvable`] trait they share.
//! Both follow the same lifecycle: created as `pending`, then decided by
//! exactly one approval action that sets the status and approver fields.
//! All other fields are immutable after creation; records are never deleted.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{HrError, HrResult};

/// Lifecycle state of an approvable record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Awaiting a decision.
    Pending,
    /// Approved by a manager or admin.
    Approved,
    /// Rejected by a manager or admin.
    Rejected,
}

/// The two request buckets an operation can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestCategory {
    /// Leave requests (date range).
    Leave,
    /// Attendance corrections (single date).
    Correction,
}

/// Inclusive day count between two dates.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use leave_desk::models::inclusive_days;
///
/// let start = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
/// assert_eq!(inclusive_days(start, end), 3);
/// ```
pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// Parses a `YYYY-MM-DD` wire date, failing with a validation error.
pub fn parse_date(value: &str) -> HrResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| HrError::validation(format!("Invalid date: {value}")))
}

/// Common capability of records that go through the approval workflow.
///
/// Keeps the approval and reporting code independent of the concrete
/// record kind.
pub trait Approvable {
    /// The record's unique identifier.
    fn id(&self) -> &str;
    /// The id of the user who owns the record.
    fn user_id(&self) -> &str;
    /// Current lifecycle state.
    fn status(&self) -> RequestStatus;
    /// The date span the record covers. Single-date records return the
    /// same date for both ends.
    fn span(&self) -> (NaiveDate, NaiveDate);
    /// Applies an approval decision.
    fn decide(&mut self, status: RequestStatus, comment: &str, approver: &str);
}

/// A leave request covering an inclusive date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Generated identifier, `lv-` followed by a UTC timestamp.
    pub id: String,
    /// Owner reference; always a known user at creation time.
    pub user_id: String,
    /// Owner display name captured at creation, not re-derived.
    pub employee_name: String,
    /// Owner department captured at creation, not re-derived.
    pub department: String,
    /// Leave type label. Not validated against configured leave types.
    pub leave_type: String,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive), never before `start_date`.
    pub end_date: NaiveDate,
    /// Inclusive day count, recomputed from the dates at creation.
    pub days: i64,
    /// Free-form reason supplied by the requester.
    pub reason: String,
    /// Lifecycle state.
    pub status: RequestStatus,
    /// Comment left by the approver, empty until decided.
    pub approver_comment: String,
    /// Display name of the approving user, empty until decided.
    pub approved_by: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Approvable for LeaveRequest {
    fn id(&self) -> &str {
        &self.id
    }

    fn user_id(&self) -> &str {
        &self.user_id
    }

    fn status(&self) -> RequestStatus {
        self.status
    }

    fn span(&self) -> (NaiveDate, NaiveDate) {
        (self.start_date, self.end_date)
    }

    fn decide(&mut self, status: RequestStatus, comment: &str, approver: &str) {
        self.status = status;
        self.approver_comment = comment.to_string();
        self.approved_by = approver.to_string();
    }
}

/// An attendance correction for a single work day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceCorrection {
    /// Generated identifier, `ac-` followed by a UTC timestamp.
    pub id: String,
    /// Owner reference; always a known user at creation time.
    pub user_id: String,
    /// Owner display name captured at creation.
    pub employee_name: String,
    /// Owner department captured at creation.
    pub department: String,
    /// The day being corrected.
    pub date: NaiveDate,
    /// Corrected clock-in time, free-form (e.g. "09:00").
    pub clock_in: String,
    /// Corrected clock-out time, free-form.
    pub clock_out: String,
    /// Break minutes for the day, 0 when not supplied.
    pub break_minutes: u32,
    /// Overtime hours for the day, 0 when not supplied.
    pub overtime_hours: f64,
    /// Free-form reason supplied by the requester.
    pub reason: String,
    /// Lifecycle state.
    pub status: RequestStatus,
    /// Comment left by the approver, empty until decided.
    pub approver_comment: String,
    /// Display name of the approving user, empty until decided.
    pub approved_by: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Approvable for AttendanceCorrection {
    fn id(&self) -> &str {
        &self.id
    }

    fn user_id(&self) -> &str {
        &self.user_id
    }

    fn status(&self) -> RequestStatus {
        self.status
    }

    fn span(&self) -> (NaiveDate, NaiveDate) {
        (self.date, self.date)
    }

    fn decide(&mut self, status: RequestStatus, comment: &str, approver: &str) {
        self.status = status;
        self.approver_comment = comment.to_string();
        self.approved_by = approver.to_string();
    }
}

/// A record of either kind, as returned by listing and approval operations.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RequestRecord {
    /// A leave request.
    Leave(LeaveRequest),
    /// An attendance correction.
    Correction(AttendanceCorrection),
}
