//! Ownership predicates.
//!
//! `is_owner` is advisory — it decides what a view exposes, never what a
//! mutation allows. Writes re-check ownership at the store boundary.

use uuid::Uuid;

use crate::profile::Profile;

/// Whether `requester` owns `profile`. `None` (an anonymous finder) never
/// owns anything.
pub fn is_owner(profile: &Profile, requester: Option<Uuid>) -> bool {
  requester.is_some_and(|id| id == profile.owner_id)
}
