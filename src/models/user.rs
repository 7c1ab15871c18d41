//! User model and role enum.

use serde::{Deserialize, Serialize};

/// The role a user holds within the organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular employee: submits requests, sees only their own records.
    Employee,
    /// Manager: approves requests for direct reports.
    Manager,
    /// Admin: full visibility, may update settings.
    Admin,
}

impl Role {
    /// The wire name of the role, as asserted in `X-User-Role`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::Manager => "manager",
            Role::Admin => "admin",
        }
    }
}

/// A user of the service.
///
/// Users are created only via the seed dataset, never through the request
/// workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique, stable identifier (e.g. "e001").
    pub id: String,
    /// Display name, stamped onto records the user creates or approves.
    pub name: String,
    /// The user's role.
    pub role: Role,
    /// The department the user belongs to.
    pub department: String,
    /// The user's direct manager, absent for top-level admins.
    pub manager_id: Option<String>,
    /// Annual leave allowance in days.
    pub annual_leave_allowance: u32,
}
