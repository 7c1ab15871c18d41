//! Create/list/approve state machine for approvable requests.
//!
//! Workflow functions operate on a `&mut Dataset` (or `&Dataset` for
//! listing) so they compose with [`crate::store::Store::update`], which
//! provides the persistence and mutual exclusion around them.

mod approval;
mod correction;
mod leave;

pub use approval::{decide, parse_action, parse_category};
pub use correction::{create_correction, NewCorrection};
pub use leave::{create_leave, NewLeaveRequest};

use chrono::{DateTime, Utc};

use crate::auth::{can_view, Scope};
use crate::models::{Approvable, Dataset, RequestCategory, RequestRecord, User};

/// Generates a record id: prefix plus a microsecond UTC timestamp, so ids
/// sort roughly by creation time.
pub(crate) fn generate_id(prefix: &str, now: DateTime<Utc>) -> String {
    format!("{prefix}-{}", now.format("%Y%m%d%H%M%S%6f"))
}

/// Lists the requested bucket, filtered by the record-visibility rule.
/// No pagination.
pub fn list(
    data: &Dataset,
    actor: &User,
    category: RequestCategory,
    scope: Scope,
) -> Vec<RequestRecord> {
    fn visible<R: Approvable>(data: &Dataset, actor: &User, scope: Scope, record: &R) -> bool {
        can_view(actor, data.user(record.user_id()), record.user_id(), scope)
    }

    match category {
        RequestCategory::Leave => data
            .leave_requests
            .iter()
            .filter(|r| visible(data, actor, scope, *r))
            .cloned()
            .map(RequestRecord::Leave)
            .collect(),
        RequestCategory::Correction => data
            .attendance_corrections
            .iter()
            .filter(|r| visible(data, actor, scope, *r))
            .cloned()
            .map(RequestRecord::Correction)
            .collect(),
    }
}
