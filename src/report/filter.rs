//! Report filters.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::HrResult;
use crate::models::{parse_date, Approvable, User};

/// Parsed report filters. Every filter is optional; absence means
/// unconstrained.
#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    /// Window start (inclusive).
    pub start: Option<NaiveDate>,
    /// Window end (inclusive).
    pub end: Option<NaiveDate>,
    /// Department filter, matched against the owner's current department.
    pub department: Option<String>,
    /// Employee filter, matched against the record's `user_id`.
    pub employee: Option<String>,
}

/// The raw filter values echoed back in the summary response.
#[derive(Debug, Clone, Serialize)]
pub struct FilterEcho {
    /// Raw start value ("" when absent).
    pub start: String,
    /// Raw end value ("" when absent).
    pub end: String,
    /// Raw department value ("" when absent).
    pub department: String,
    /// Raw employee value ("" when absent).
    pub employee: String,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl ReportFilter {
    /// Builds a filter from raw query values, treating empty strings as
    /// absent. Fails with a validation error on unparseable dates.
    pub fn from_params(
        start: Option<String>,
        end: Option<String>,
        department: Option<String>,
        employee: Option<String>,
    ) -> HrResult<Self> {
        let start = non_empty(start).map(|s| parse_date(&s)).transpose()?;
        let end = non_empty(end).map(|s| parse_date(&s)).transpose()?;
        Ok(Self {
            start,
            end,
            department: non_empty(department),
            employee: non_empty(employee),
        })
    }

    /// The raw filter values for echoing back to the caller.
    pub fn echo(&self) -> FilterEcho {
        FilterEcho {
            start: self.start.map(|d| d.to_string()).unwrap_or_default(),
            end: self.end.map(|d| d.to_string()).unwrap_or_default(),
            department: self.department.clone().unwrap_or_default(),
            employee: self.employee.clone().unwrap_or_default(),
        }
    }

    /// Department and employee matching, shared by both date rules. The
    /// department filter tests the owner's current department and passes
    /// when the owner no longer exists.
    fn matches_identity<R: Approvable>(&self, users: &[User], record: &R) -> bool {
        if let Some(department) = &self.department {
            let owner = users.iter().find(|u| u.id == record.user_id());
            if owner.is_some_and(|o| &o.department != department) {
                return false;
            }
        }
        if let Some(employee) = &self.employee {
            if record.user_id() != employee {
                return false;
            }
        }
        true
    }

    /// Containment date rule, used by the summary report: the record's
    /// whole span must lie within the window.
    pub fn contains<R: Approvable>(&self, users: &[User], record: &R) -> bool {
        if !self.matches_identity(users, record) {
            return false;
        }
        let (item_start, item_end) = record.span();
        if self.start.is_some_and(|start| item_start < start) {
            return false;
        }
        if self.end.is_some_and(|end| item_end > end) {
            return false;
        }
        true
    }

    /// Overlap date rule, used by the export: any intersection between the
    /// record's span and the window qualifies.
    pub fn overlaps<R: Approvable>(&self, users: &[User], record: &R) -> bool {
        if !self.matches_identity(users, record) {
            return false;
        }
        let (item_start, item_end) = record.span();
        if self.start.is_some_and(|start| item_end < start) {
            return false;
        }
        if self.end.is_some_and(|end| item_start > end) {
            return false;
        }
        true
    }
}
