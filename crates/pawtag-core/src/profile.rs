//! Profiles — the registered pet record behind a bound identifier.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result, patch::Patch};

/// How a finder should reach the tutor first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactChannel {
  #[default]
  Message,
  Call,
}

/// The registered pet record. Public display plus tutor contact info.
///
/// `identifier_id` and `owner_id` are set at creation and never change.
/// `contact_name` and `phone` are mandatory; everything else is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
  pub profile_id:      Uuid,
  pub identifier_id:   Uuid,
  pub owner_id:        Uuid,
  pub contact_name:    String,
  pub phone:           String,
  pub channel:         ContactChannel,
  pub secondary_phone: Option<String>,
  pub name:            Option<String>,
  pub species:         Option<String>,
  pub breed:           Option<String>,
  pub birth_date:      Option<NaiveDate>,
  pub sex:             Option<String>,
  pub notes:           Option<String>,
  /// Reference to an uploaded photo (a `/photos/...` path), if any.
  pub photo:           Option<String>,
  pub created_at:      DateTime<Utc>,
}

/// A profile bundled with its identifier's code, as shown on the tutor's
/// own-pets listing.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileWithCode {
  #[serde(flatten)]
  pub profile: Profile,
  pub code:    String,
}

/// Input for profile creation during activation. `profile_id`,
/// `identifier_id`, `owner_id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewProfile {
  pub contact_name:    String,
  pub phone:           String,
  #[serde(default)]
  pub channel:         ContactChannel,
  #[serde(default)]
  pub secondary_phone: Option<String>,
  #[serde(default)]
  pub name:            Option<String>,
  #[serde(default)]
  pub species:         Option<String>,
  #[serde(default)]
  pub breed:           Option<String>,
  #[serde(default)]
  pub birth_date:      Option<NaiveDate>,
  #[serde(default)]
  pub sex:             Option<String>,
  #[serde(default)]
  pub notes:           Option<String>,
}

impl NewProfile {
  /// Mandatory-field check, run before any storage is touched.
  pub fn validate(&self) -> Result<()> {
    if self.contact_name.trim().is_empty() {
      return Err(Error::Validation("contact name is required".into()));
    }
    if self.phone.trim().is_empty() {
      return Err(Error::Validation("phone is required".into()));
    }
    Ok(())
  }
}

/// Partial update of a profile. Every field defaults to [`Patch::Keep`], so
/// an empty body is a no-op. Mandatory fields reject [`Patch::Clear`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfilePatch {
  #[serde(default)]
  pub contact_name:    Patch<String>,
  #[serde(default)]
  pub phone:           Patch<String>,
  #[serde(default)]
  pub channel:         Patch<ContactChannel>,
  #[serde(default)]
  pub secondary_phone: Patch<String>,
  #[serde(default)]
  pub name:            Patch<String>,
  #[serde(default)]
  pub species:         Patch<String>,
  #[serde(default)]
  pub breed:           Patch<String>,
  #[serde(default)]
  pub birth_date:      Patch<NaiveDate>,
  #[serde(default)]
  pub sex:             Patch<String>,
  #[serde(default)]
  pub notes:           Patch<String>,
  #[serde(default)]
  pub photo:           Patch<String>,
}

impl ProfilePatch {
  /// Apply the patch in place. Fails with [`Error::Validation`] if a
  /// mandatory field would be cleared or set to an empty string; in that
  /// case `profile` is left partially modified and must be discarded.
  pub fn apply(self, profile: &mut Profile) -> Result<()> {
    match self.contact_name {
      Patch::Keep => {}
      Patch::Clear => {
        return Err(Error::Validation("contact name cannot be cleared".into()));
      }
      Patch::Set(value) => {
        if value.trim().is_empty() {
          return Err(Error::Validation("contact name is required".into()));
        }
        profile.contact_name = value;
      }
    }
    match self.phone {
      Patch::Keep => {}
      Patch::Clear => {
        return Err(Error::Validation("phone cannot be cleared".into()));
      }
      Patch::Set(value) => {
        if value.trim().is_empty() {
          return Err(Error::Validation("phone is required".into()));
        }
        profile.phone = value;
      }
    }
    match self.channel {
      Patch::Keep => {}
      Patch::Clear => {
        return Err(Error::Validation("contact channel cannot be cleared".into()));
      }
      Patch::Set(value) => profile.channel = value,
    }

    profile.secondary_phone = self.secondary_phone.resolve(profile.secondary_phone.take());
    profile.name = self.name.resolve(profile.name.take());
    profile.species = self.species.resolve(profile.species.take());
    profile.breed = self.breed.resolve(profile.breed.take());
    profile.birth_date = self.birth_date.resolve(profile.birth_date.take());
    profile.sex = self.sex.resolve(profile.sex.take());
    profile.notes = self.notes.resolve(profile.notes.take());
    profile.photo = self.photo.resolve(profile.photo.take());
    Ok(())
  }
}
