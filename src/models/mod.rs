//! Data model for the leave desk service.
//!
//! This module defines the persisted record types: users, the two
//! approvable request kinds, and the dataset document that holds them all.

mod dataset;
mod request;
mod user;

pub use dataset::{ApprovalRoute, Dataset, SettingsUpdate, SettingsView, WorkCalendar};
pub use request::{
    inclusive_days, parse_date, Approvable, AttendanceCorrection, LeaveRequest,
    RequestCategory, RequestRecord, RequestStatus,
};
pub use user::{Role, User};
