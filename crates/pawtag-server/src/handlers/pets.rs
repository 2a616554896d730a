//! The public pet view — the page a finder lands on after scanning a tag.

use axum::{
  Json,
  extract::{Path, State},
};
use chrono::NaiveDate;
use pawtag_core::{
  access,
  identifier::TagStatus,
  profile::{ContactChannel, Profile},
  store::RegistryStore,
};
use serde::Serialize;
use uuid::Uuid;

use crate::{
  AppState,
  auth::MaybeAccount,
  error::ApiError,
};

/// The subset of a profile shown to anyone who scans the tag. The owner's
/// account reference is deliberately absent.
#[derive(Debug, Serialize)]
pub struct PublicProfile {
  pub profile_id:      Uuid,
  pub name:            Option<String>,
  pub species:         Option<String>,
  pub breed:           Option<String>,
  pub birth_date:      Option<NaiveDate>,
  pub sex:             Option<String>,
  pub notes:           Option<String>,
  pub photo:           Option<String>,
  pub contact_name:    String,
  pub phone:           String,
  pub channel:         ContactChannel,
  pub secondary_phone: Option<String>,
}

impl From<Profile> for PublicProfile {
  fn from(p: Profile) -> Self {
    Self {
      profile_id:      p.profile_id,
      name:            p.name,
      species:         p.species,
      breed:           p.breed,
      birth_date:      p.birth_date,
      sex:             p.sex,
      notes:           p.notes,
      photo:           p.photo,
      contact_name:    p.contact_name,
      phone:           p.phone,
      channel:         p.channel,
      secondary_phone: p.secondary_phone,
    }
  }
}

#[derive(Debug, Serialize)]
pub struct PetView {
  pub code:     String,
  pub status:   TagStatus,
  pub pet:      Option<PublicProfile>,
  /// Advisory: lets the client show edit affordances. Writes are
  /// re-authorised server-side regardless.
  pub is_owner: bool,
}

/// `GET /api/pets/{code}`
///
/// - Unknown code → 404 ("this tag is not registered").
/// - Unbound + anonymous → 401 challenge; the client signs in and retries,
///   landing back here to be sent on to activation.
/// - Unbound + authenticated → `status: "unbound"`, no pet — needs activation.
/// - Bound → public fields for any requester, no authentication required.
pub async fn view<S>(
  State(state): State<AppState<S>>,
  Path(code): Path<String>,
  MaybeAccount(account): MaybeAccount,
) -> Result<Json<PetView>, ApiError>
where
  S: RegistryStore + Clone + Send + Sync + 'static,
{
  let found = state
    .store
    .get_identifier_with_profile(&code)
    .await
    .map_err(ApiError::from_store)?;

  let Some((identifier, profile)) = found else {
    return Err(pawtag_core::Error::IdentifierNotFound(code).into());
  };

  match (identifier.status, profile) {
    (TagStatus::Unbound, _) => {
      if account.is_none() {
        return Err(pawtag_core::Error::Unauthenticated.into());
      }
      Ok(Json(PetView {
        code:     identifier.code,
        status:   TagStatus::Unbound,
        pet:      None,
        is_owner: false,
      }))
    }
    (TagStatus::Bound, Some(profile)) => {
      let is_owner =
        access::is_owner(&profile, account.map(|a| a.account_id));
      Ok(Json(PetView {
        code: identifier.code,
        status: TagStatus::Bound,
        pet: Some(profile.into()),
        is_owner,
      }))
    }
    (TagStatus::Bound, None) => Err(
      pawtag_core::Error::Storage("bound identifier has no profile".into()).into(),
    ),
  }
}
