//! Identity resolution and authorization rules.
//!
//! Split into two halves: [`identity`] maps asserted identity claims to a
//! concrete user record, and [`policy`] holds the team-scoping and
//! role-gating primitives reused by every operation.

mod identity;
mod policy;

pub use identity::{resolve, AssertedIdentity};
pub use policy::{can_view, in_team, require_role, Scope};
