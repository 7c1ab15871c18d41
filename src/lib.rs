//! Leave & Attendance Approval Service
//!
//! This crate implements a small internal request/approval service:
//! employees submit leave requests and attendance corrections, managers and
//! admins approve or reject them within their team scope, and admins
//! configure leave types, holidays, and approval routing. Reports over
//! approved records can be generated and exported as CSV.

#![warn(missing_docs)]

pub mod api;
pub mod auth;
pub mod error;
pub mod models;
pub mod report;
pub mod store;
pub mod workflow;
