//! Team-scoping and role-gating primitives.

use crate::error::{HrError, HrResult};
use crate::models::{Role, User};

/// Visibility scope requested on a listing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Own records only.
    Mine,
    /// Own records plus direct reports' records (managers only).
    Team,
}

impl Scope {
    /// Parses a `scope` query parameter. Anything other than `team`
    /// (including absence) means [`Scope::Mine`].
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("team") => Scope::Team,
            _ => Scope::Mine,
        }
    }
}

/// Direct-report team membership test.
///
/// Admins are in-team of everyone. Otherwise the subject must report
/// directly to the actor; the relation is deliberately not transitive, so a
/// manager's manager is not in-team of the lower manager's reports.
///
/// # Example
///
/// ```
/// use leave_desk::auth::in_team;
/// use leave_desk::models::Dataset;
///
/// let data = Dataset::seed();
/// let manager = data.user("m001").unwrap();
/// let report = data.user("e001").unwrap();
/// let other = data.user("e002").unwrap();
/// assert!(in_team(manager, report));
/// assert!(!in_team(manager, other));
/// ```
pub fn in_team(actor: &User, subject: &User) -> bool {
    if actor.role == Role::Admin {
        return true;
    }
    subject.manager_id.as_deref() == Some(actor.id.as_str())
}

/// Fails with [`HrError::Forbidden`] unless the actor holds one of the
/// allowed roles.
pub fn require_role(actor: &User, allowed: &[Role]) -> HrResult<()> {
    if allowed.contains(&actor.role) {
        Ok(())
    } else {
        Err(HrError::forbidden("Forbidden for this role"))
    }
}

/// Record-visibility rule for listing.
///
/// Employees see only their own records regardless of the requested scope;
/// managers see their own unless `scope=team`, which adds records owned by
/// their direct reports; admins see everything. `owner` is the record
/// owner's user record, when it still exists.
pub fn can_view(actor: &User, owner: Option<&User>, owner_id: &str, scope: Scope) -> bool {
    match actor.role {
        Role::Admin => true,
        Role::Manager => {
            owner_id == actor.id
                || (scope == Scope::Team && owner.is_some_and(|o| in_team(actor, o)))
        }
        Role::Employee => owner_id == actor.id,
    }
}
