//! The persisted dataset document.
//!
//! The whole service state — users, configuration, and both request
//! buckets — is one JSON document, always loaded and persisted as a unit
//! so readers never observe a partial write.

use serde::{Deserialize, Serialize};

use super::request::{AttendanceCorrection, LeaveRequest};
use super::user::{Role, User};

/// Working calendar configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkCalendar {
    /// Company holidays as `YYYY-MM-DD` strings, admin-mutable.
    pub holidays: Vec<String>,
}

/// Informational mapping from a department to its approving manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovalRoute {
    /// The department the route applies to.
    pub department: String,
    /// The id of the manager who approves for that department.
    pub manager_id: String,
}

/// The full persisted state of the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// All known users. Seed-only; never mutated by the workflow.
    pub users: Vec<User>,
    /// Configured leave type labels.
    pub leave_types: Vec<String>,
    /// Working calendar configuration.
    pub work_calendar: WorkCalendar,
    /// Department-to-manager approval routes.
    pub approval_routes: Vec<ApprovalRoute>,
    /// All leave requests ever created.
    pub leave_requests: Vec<LeaveRequest>,
    /// All attendance corrections ever created.
    pub attendance_corrections: Vec<AttendanceCorrection>,
}

/// Admin-supplied settings changes. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsUpdate {
    /// Replacement leave type labels.
    pub leave_types: Option<Vec<String>>,
    /// Replacement holiday list.
    pub holidays: Option<Vec<String>>,
    /// Replacement approval routes.
    pub approval_routes: Option<Vec<ApprovalRoute>>,
}

/// The admin-mutable settings portion of the dataset, echoed back after
/// a settings update.
#[derive(Debug, Clone, Serialize)]
pub struct SettingsView {
    /// Configured leave type labels.
    pub leave_types: Vec<String>,
    /// Working calendar configuration.
    pub work_calendar: WorkCalendar,
    /// Department-to-manager approval routes.
    pub approval_routes: Vec<ApprovalRoute>,
}

impl Dataset {
    /// The fixed seed dataset used when the store is missing or corrupt.
    pub fn seed() -> Self {
        Self {
            users: vec![
                User {
                    id: "e001".to_string(),
                    name: "Alice Tanaka".to_string(),
                    role: Role::Employee,
                    department: "Sales".to_string(),
                    manager_id: Some("m001".to_string()),
                    annual_leave_allowance: 20,
                },
                User {
                    id: "e002".to_string(),
                    name: "Bob Suzuki".to_string(),
                    role: Role::Employee,
                    department: "Engineering".to_string(),
                    manager_id: Some("m002".to_string()),
                    annual_leave_allowance: 18,
                },
                User {
                    id: "m001".to_string(),
                    name: "Mika Yamada".to_string(),
                    role: Role::Manager,
                    department: "Sales".to_string(),
                    manager_id: Some("a001".to_string()),
                    annual_leave_allowance: 22,
                },
                User {
                    id: "m002".to_string(),
                    name: "Ryo Watanabe".to_string(),
                    role: Role::Manager,
                    department: "Engineering".to_string(),
                    manager_id: Some("a001".to_string()),
                    annual_leave_allowance: 22,
                },
                User {
                    id: "a001".to_string(),
                    name: "Admin Ito".to_string(),
                    role: Role::Admin,
                    department: "HQ".to_string(),
                    manager_id: None,
                    annual_leave_allowance: 25,
                },
            ],
            leave_types: vec![
                "Paid".to_string(),
                "Sick".to_string(),
                "Half-day".to_string(),
                "Special".to_string(),
            ],
            work_calendar: WorkCalendar {
                holidays: vec![
                    "2025-01-01".to_string(),
                    "2025-02-11".to_string(),
                    "2025-04-29".to_string(),
                    "2025-05-03".to_string(),
                ],
            },
            approval_routes: vec![
                ApprovalRoute {
                    department: "Sales".to_string(),
                    manager_id: "m001".to_string(),
                },
                ApprovalRoute {
                    department: "Engineering".to_string(),
                    manager_id: "m002".to_string(),
                },
            ],
            leave_requests: Vec::new(),
            attendance_corrections: Vec::new(),
        }
    }

    /// Looks up a user by id.
    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Applies an admin settings update. Provided lists replace the stored
    /// ones; empty strings are dropped from string lists.
    pub fn apply_settings(&mut self, update: SettingsUpdate) {
        if let Some(leave_types) = update.leave_types {
            self.leave_types = leave_types.into_iter().filter(|s| !s.is_empty()).collect();
        }
        if let Some(holidays) = update.holidays {
            self.work_calendar.holidays =
                holidays.into_iter().filter(|s| !s.is_empty()).collect();
        }
        if let Some(approval_routes) = update.approval_routes {
            self.approval_routes = approval_routes;
        }
    }

    /// The admin-mutable settings portion of this dataset.
    pub fn settings(&self) -> SettingsView {
        SettingsView {
            leave_types: self.leave_types.clone(),
            work_calendar: self.work_calendar.clone(),
            approval_routes: self.approval_routes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_users_and_config() {
        let seed = Dataset::seed();
        assert_eq!(seed.users.len(), 5);
        assert_eq!(seed.leave_types, vec!["Paid", "Sick", "Half-day", "Special"]);
        assert_eq!(seed.work_calendar.holidays.len(), 4);
        assert_eq!(seed.approval_routes.len(), 2);
        assert!(seed.leave_requests.is_empty());
        assert!(seed.attendance_corrections.is_empty());
    }

    #[test]
    fn test_seed_manager_chain() {
        let seed = Dataset::seed();
        let alice = seed.user("e001").unwrap();
        assert_eq!(alice.manager_id.as_deref(), Some("m001"));
        let admin = seed.user("a001").unwrap();
        assert_eq!(admin.manager_id, None);
        assert_eq!(admin.role, Role::Admin);
    }

    #[test]
    fn test_user_lookup_unknown_id() {
        assert!(Dataset::seed().user("nobody").is_none());
    }

    #[test]
    fn test_apply_settings_replaces_only_provided_lists() {
        let mut data = Dataset::seed();
        data.apply_settings(SettingsUpdate {
            leave_types: Some(vec!["Paid".to_string(), String::new(), "Sick".to_string()]),
            holidays: None,
            approval_routes: None,
        });

        // Empty entries dropped, holidays untouched.
        assert_eq!(data.leave_types, vec!["Paid", "Sick"]);
        assert_eq!(data.work_calendar.holidays.len(), 4);
    }

    #[test]
    fn test_apply_settings_replaces_routes() {
        let mut data = Dataset::seed();
        data.apply_settings(SettingsUpdate {
            leave_types: None,
            holidays: Some(vec!["2026-01-01".to_string()]),
            approval_routes: Some(vec![ApprovalRoute {
                department: "HQ".to_string(),
                manager_id: "a001".to_string(),
            }]),
        });

        assert_eq!(data.work_calendar.holidays, vec!["2026-01-01"]);
        assert_eq!(data.approval_routes.len(), 1);
        assert_eq!(data.approval_routes[0].department, "HQ");
    }

    #[test]
    fn test_dataset_json_round_trip() {
        let seed = Dataset::seed();
        let json = serde_json::to_string_pretty(&seed).unwrap();
        let back: Dataset = serde_json::from_str(&json).unwrap();
        assert_eq!(seed, back);
    }
}
