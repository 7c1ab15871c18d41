//! Summary report: approved leave totals against allowances.

use serde::Serialize;

use crate::models::{Dataset, RequestStatus};

use super::filter::{FilterEcho, ReportFilter};

/// Aggregated approved leave days for one employee.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaveTotal {
    /// The employee's user id.
    pub employee_id: String,
    /// Current display name, "" when the user no longer exists.
    pub employee_name: String,
    /// Current department, "" when the user no longer exists.
    pub department: String,
    /// Sum of `days` over matching approved leave requests.
    pub leave_days_taken: i64,
    /// Allowance minus taken, clamped at zero.
    pub leave_days_remaining: i64,
}

/// The summary report payload.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    /// Per-employee approved leave totals, in first-seen order.
    pub leave_totals: Vec<LeaveTotal>,
    /// Count of matching approved attendance corrections.
    pub correction_count: usize,
    /// The filters the report was generated with.
    pub filters: FilterEcho,
}

/// Builds the summary report: approved records only, containment date rule.
///
/// Deliberately not scoped to the caller's team; a manager sees totals for
/// all matching employees. The HTTP layer gates this to managers/admins.
pub fn summary(data: &Dataset, filter: &ReportFilter) -> SummaryReport {
    let approved_leave = data
        .leave_requests
        .iter()
        .filter(|r| r.status == RequestStatus::Approved && filter.contains(&data.users, *r));

    // Accumulate per user, preserving first-seen order.
    let mut totals: Vec<(String, i64)> = Vec::new();
    for request in approved_leave {
        match totals.iter_mut().find(|(id, _)| id == &request.user_id) {
            Some((_, days)) => *days += request.days,
            None => totals.push((request.user_id.clone(), request.days)),
        }
    }

    let leave_totals = totals
        .into_iter()
        .map(|(user_id, taken)| {
            let owner = data.user(&user_id);
            let allowance = owner.map(|u| i64::from(u.annual_leave_allowance)).unwrap_or(0);
            LeaveTotal {
                employee_id: user_id,
                employee_name: owner.map(|u| u.name.clone()).unwrap_or_default(),
                department: owner.map(|u| u.department.clone()).unwrap_or_default(),
                leave_days_taken: taken,
                leave_days_remaining: (allowance - taken).max(0),
            }
        })
        .collect();

    let correction_count = data
        .attendance_corrections
        .iter()
        .filter(|r| r.status == RequestStatus::Approved && filter.contains(&data.users, *r))
        .count();

    SummaryReport {
        leave_totals,
        correction_count,
        filters: filter.echo(),
    }
}
