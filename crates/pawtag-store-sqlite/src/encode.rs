//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings, birth dates as ISO 8601 dates,
//! UUIDs as hyphenated lowercase strings, and enums as lowercase keywords.

use chrono::{DateTime, NaiveDate, Utc};
use pawtag_core::{
  account::{Account, Role},
  identifier::{Identifier, TagStatus},
  profile::{ContactChannel, Profile},
};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── NaiveDate ───────────────────────────────────────────────────────────────

pub fn encode_date(d: NaiveDate) -> String { d.to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  s.parse().map_err(|_| Error::DateParse(format!("bad date: {s:?}")))
}

// ─── TagStatus ───────────────────────────────────────────────────────────────

pub fn encode_status(s: TagStatus) -> &'static str {
  match s {
    TagStatus::Unbound => "unbound",
    TagStatus::Bound => "bound",
  }
}

pub fn decode_status(s: &str) -> Result<TagStatus> {
  match s {
    "unbound" => Ok(TagStatus::Unbound),
    "bound" => Ok(TagStatus::Bound),
    other => Err(Error::DateParse(format!("unknown status: {other:?}"))),
  }
}

// ─── Role ────────────────────────────────────────────────────────────────────

pub fn encode_role(r: Role) -> &'static str {
  match r {
    Role::Admin => "admin",
    Role::Tutor => "tutor",
  }
}

pub fn decode_role(s: &str) -> Result<Role> {
  match s {
    "admin" => Ok(Role::Admin),
    "tutor" => Ok(Role::Tutor),
    other => Err(Error::DateParse(format!("unknown role: {other:?}"))),
  }
}

// ─── ContactChannel ──────────────────────────────────────────────────────────

pub fn encode_channel(c: ContactChannel) -> &'static str {
  match c {
    ContactChannel::Message => "message",
    ContactChannel::Call => "call",
  }
}

pub fn decode_channel(s: &str) -> Result<ContactChannel> {
  match s {
    "message" => Ok(ContactChannel::Message),
    "call" => Ok(ContactChannel::Call),
    other => Err(Error::DateParse(format!("unknown channel: {other:?}"))),
  }
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from an `accounts` row.
pub struct RawAccount {
  pub account_id:    String,
  pub email:         String,
  pub name:          String,
  pub password_hash: String,
  pub role:          String,
  pub created_at:    String,
}

impl RawAccount {
  pub fn into_account(self) -> Result<Account> {
    Ok(Account {
      account_id:    decode_uuid(&self.account_id)?,
      email:         self.email,
      name:          self.name,
      password_hash: self.password_hash,
      role:          decode_role(&self.role)?,
      created_at:    decode_dt(&self.created_at)?,
    })
  }
}

/// Raw strings read directly from an `identifiers` row.
pub struct RawIdentifier {
  pub identifier_id: String,
  pub code:          String,
  pub status:        String,
  pub created_at:    String,
  pub bound_at:      Option<String>,
}

impl RawIdentifier {
  pub fn into_identifier(self) -> Result<Identifier> {
    Ok(Identifier {
      identifier_id: decode_uuid(&self.identifier_id)?,
      code:          self.code,
      status:        decode_status(&self.status)?,
      created_at:    decode_dt(&self.created_at)?,
      bound_at:      self.bound_at.as_deref().map(decode_dt).transpose()?,
    })
  }
}

/// Raw strings read directly from a `profiles` row.
pub struct RawProfile {
  pub profile_id:      String,
  pub identifier_id:   String,
  pub owner_id:        String,
  pub contact_name:    String,
  pub phone:           String,
  pub channel:         String,
  pub secondary_phone: Option<String>,
  pub name:            Option<String>,
  pub species:         Option<String>,
  pub breed:           Option<String>,
  pub birth_date:      Option<String>,
  pub sex:             Option<String>,
  pub notes:           Option<String>,
  pub photo:           Option<String>,
  pub created_at:      String,
}

impl RawProfile {
  pub fn into_profile(self) -> Result<Profile> {
    Ok(Profile {
      profile_id:      decode_uuid(&self.profile_id)?,
      identifier_id:   decode_uuid(&self.identifier_id)?,
      owner_id:        decode_uuid(&self.owner_id)?,
      contact_name:    self.contact_name,
      phone:           self.phone,
      channel:         decode_channel(&self.channel)?,
      secondary_phone: self.secondary_phone,
      name:            self.name,
      species:         self.species,
      breed:           self.breed,
      birth_date:      self.birth_date.as_deref().map(decode_date).transpose()?,
      sex:             self.sex,
      notes:           self.notes,
      photo:           self.photo,
      created_at:      decode_dt(&self.created_at)?,
    })
  }
}
