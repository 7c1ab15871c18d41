//! HTTP API module for the leave desk service.
//!
//! Exposes the JSON operations under `/api/*`: metadata, login, request
//! creation and listing, approvals, reports, CSV export, and settings.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ApprovalRequest, ListParams, LoginRequest, ReportParams};
pub use response::ApiError;
pub use state::AppState;
