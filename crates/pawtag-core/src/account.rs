//! Accounts — authenticated principals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The authorisation role of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  Admin,
  Tutor,
}

/// An authenticated principal. The password hash is an argon2 PHC string and
/// is never serialised out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
  pub account_id:    Uuid,
  pub email:         String,
  pub name:          String,
  #[serde(skip_serializing)]
  pub password_hash: String,
  pub role:          Role,
  pub created_at:    DateTime<Utc>,
}

impl Account {
  pub fn is_admin(&self) -> bool { self.role == Role::Admin }
}

/// Input for account creation. The `account_id` and `created_at` are assigned
/// by the store.
#[derive(Debug, Clone)]
pub struct NewAccount {
  pub email:         String,
  pub name:          String,
  pub password_hash: String,
  pub role:          Role,
}
