//! Identifiers — one row per physical, printable tag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of an identifier. `Bound` is terminal; the only
/// transition is Unbound → Bound, performed exactly once by activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagStatus {
  Unbound,
  Bound,
}

impl TagStatus {
  pub fn is_bound(self) -> bool { matches!(self, TagStatus::Bound) }
}

/// One printable tag.
///
/// `code` is a width-5 zero-padded decimal string, unique and immutable.
/// Invariant: `bound_at` is `Some` iff `status` is [`TagStatus::Bound`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identifier {
  pub identifier_id: Uuid,
  pub code:          String,
  pub status:        TagStatus,
  pub created_at:    DateTime<Utc>,
  pub bound_at:      Option<DateTime<Utc>>,
}
