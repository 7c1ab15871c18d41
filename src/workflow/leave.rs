//! Leave request creation.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{HrError, HrResult};
use crate::models::{inclusive_days, parse_date, Dataset, LeaveRequest, RequestStatus, User};

/// Caller-supplied payload for creating a leave request.
///
/// All fields are optional at the wire level so that validation can report
/// every missing field name at once; empty strings count as missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewLeaveRequest {
    /// First day of leave, `YYYY-MM-DD`.
    pub start_date: Option<String>,
    /// Last day of leave, `YYYY-MM-DD`.
    pub end_date: Option<String>,
    /// Leave type label.
    pub leave_type: Option<String>,
    /// Reason for the leave.
    pub reason: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Creates a leave request owned by `actor` and appends it to the dataset.
///
/// Owner fields are stamped from the resolved identity, never from the
/// payload, so a caller cannot create records on someone else's behalf.
pub fn create_leave(
    data: &mut Dataset,
    actor: &User,
    input: &NewLeaveRequest,
    now: DateTime<Utc>,
) -> HrResult<LeaveRequest> {
    let mut missing = Vec::new();
    for (name, value) in [
        ("start_date", &input.start_date),
        ("end_date", &input.end_date),
        ("leave_type", &input.leave_type),
        ("reason", &input.reason),
    ] {
        if present(value).is_none() {
            missing.push(name.to_string());
        }
    }
    if !missing.is_empty() {
        return Err(HrError::missing_fields(missing));
    }

    // Presence was checked above.
    let start_raw = present(&input.start_date).unwrap_or_default();
    let end_raw = present(&input.end_date).unwrap_or_default();
    let start = parse_date(start_raw)?;
    let end = parse_date(end_raw)?;
    if end < start {
        return Err(HrError::validation("End date must be on/after start date"));
    }

    let item = LeaveRequest {
        id: super::generate_id("lv", now),
        user_id: actor.id.clone(),
        employee_name: actor.name.clone(),
        department: actor.department.clone(),
        leave_type: present(&input.leave_type).unwrap_or_default().to_string(),
        start_date: start,
        end_date: end,
        days: inclusive_days(start, end),
        reason: present(&input.reason).unwrap_or_default().to_string(),
        status: RequestStatus::Pending,
        approver_comment: String::new(),
        approved_by: String::new(),
        created_at: now,
    };
    data.leave_requests.push(item.clone());
    Ok(item)
}
