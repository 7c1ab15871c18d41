//! Asserted-identity resolution.
//!
//! The service trusts caller-supplied identity claims verbatim; this is
//! explicitly not a credential-verification mechanism. A production
//! deployment would replace [`resolve`] with real authentication while
//! keeping the same downstream authorization contract, which is why the
//! resolver is a plain function over the dataset and a transport-free
//! [`AssertedIdentity`] value.

use crate::error::{HrError, HrResult};
use crate::models::{Dataset, User};

/// Identity claims extracted from a request.
#[derive(Debug, Clone, Default)]
pub struct AssertedIdentity {
    /// The asserted user id. Required for all authenticated operations.
    pub user_id: Option<String>,
    /// Optionally asserted role, used only as a consistency check against
    /// the stored record.
    pub role: Option<String>,
}

impl AssertedIdentity {
    /// Builds an identity assertion from raw claim values.
    pub fn new(user_id: Option<String>, role: Option<String>) -> Self {
        Self { user_id, role }
    }
}

/// Resolves an asserted identity to a user record.
///
/// Fails with [`HrError::Unauthenticated`] when no user id was asserted,
/// and [`HrError::Unauthorized`] when the id is unknown or an asserted
/// role does not match the stored one.
pub fn resolve<'a>(data: &'a Dataset, identity: &AssertedIdentity) -> HrResult<&'a User> {
    let user_id = identity
        .user_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or(HrError::Unauthenticated)?;

    let user = data
        .user(user_id)
        .ok_or_else(|| HrError::unauthorized("Unknown user"))?;

    if let Some(role) = identity.role.as_deref() {
        if !role.is_empty() && role != user.role.as_str() {
            return Err(HrError::unauthorized("Role mismatch for this user"));
        }
    }

    Ok(user)
}
