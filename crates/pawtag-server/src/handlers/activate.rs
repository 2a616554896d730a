//! Activation — the one-shot binding of an identifier to a new profile.

use axum::{
  Json,
  extract::State,
  http::StatusCode,
};
use pawtag_core::{
  profile::{NewProfile, Profile},
  store::RegistryStore,
};
use serde::Deserialize;

use crate::{AppState, auth::AuthedAccount, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct ActivateBody {
  pub code: String,
  #[serde(flatten)]
  pub profile: NewProfile,
}

/// `POST /api/activate`
///
/// Requires authentication; the signed-in account becomes the profile's
/// owner. Validation runs before storage is touched; the store performs the
/// Unbound → Bound flip and the profile insert in one transaction, so a
/// concurrent attempt on the same code loses with 409.
pub async fn handler<S>(
  State(state): State<AppState<S>>,
  AuthedAccount(account): AuthedAccount,
  Json(body): Json<ActivateBody>,
) -> Result<(StatusCode, Json<Profile>), ApiError>
where
  S: RegistryStore + Clone + Send + Sync + 'static,
{
  body.profile.validate()?;

  let profile = state
    .store
    .activate(&body.code, account.account_id, body.profile)
    .await
    .map_err(ApiError::from_store)?;

  Ok((StatusCode::CREATED, Json(profile)))
}
