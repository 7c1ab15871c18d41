//! The approval transition: pending → approved | rejected.
//!
//! Category and action values are validated by [`parse_category`] and
//! [`parse_action`] before any store access. Re-deciding an already decided
//! record overwrites the previous decision; the transition is not blocked.

use crate::auth::{in_team, require_role};
use crate::error::{HrError, HrResult};
use crate::models::{
    Approvable, Dataset, RequestCategory, RequestRecord, RequestStatus, Role, User,
};

/// Parses an approval `category` value.
pub fn parse_category(value: &str) -> HrResult<RequestCategory> {
    match value {
        "leave" => Ok(RequestCategory::Leave),
        "correction" => Ok(RequestCategory::Correction),
        _ => Err(HrError::validation("Invalid category")),
    }
}

/// Parses an approval `action` value. Only the two terminal states are
/// valid actions.
pub fn parse_action(value: &str) -> HrResult<RequestStatus> {
    match value {
        "approved" => Ok(RequestStatus::Approved),
        "rejected" => Ok(RequestStatus::Rejected),
        _ => Err(HrError::validation("Invalid action")),
    }
}

/// Applies an approval decision to the record `id` in the given bucket.
///
/// The actor must be a manager or admin and the record owner must be in the
/// actor's team; otherwise the action is refused even though the record
/// exists.
pub fn decide(
    data: &mut Dataset,
    actor: &User,
    category: RequestCategory,
    id: &str,
    action: RequestStatus,
    comment: &str,
) -> HrResult<RequestRecord> {
    require_role(actor, &[Role::Manager, Role::Admin])?;

    match category {
        RequestCategory::Leave => {
            decide_in(&mut data.leave_requests, &data.users, actor, id, action, comment)
                .map(RequestRecord::Leave)
        }
        RequestCategory::Correction => decide_in(
            &mut data.attendance_corrections,
            &data.users,
            actor,
            id,
            action,
            comment,
        )
        .map(RequestRecord::Correction),
    }
}

fn decide_in<R: Approvable + Clone>(
    items: &mut [R],
    users: &[User],
    actor: &User,
    id: &str,
    action: RequestStatus,
    comment: &str,
) -> HrResult<R> {
    let record = items
        .iter_mut()
        .find(|r| r.id() == id)
        .ok_or_else(|| HrError::not_found("Request"))?;

    let owner = users.iter().find(|u| u.id == record.user_id());
    if !owner.is_some_and(|o| in_team(actor, o)) {
        return Err(HrError::forbidden("Cannot approve outside your team"));
    }

    record.decide(action, comment, &actor.name);
    Ok(record.clone())
}
