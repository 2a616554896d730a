//! Tutor routes — a signed-in owner managing their own pets.

use axum::{
  Json,
  extract::{Path, State},
  http::HeaderMap,
};
use bytes::Bytes;
use pawtag_core::{
  patch::Patch,
  profile::{Profile, ProfilePatch, ProfileWithCode},
  store::RegistryStore,
};
use sha2::{Digest as _, Sha256};
use uuid::Uuid;

use crate::{AppState, auth::AuthedAccount, error::ApiError};

/// Upload cap for profile photos.
pub const MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

/// `GET /api/tutor/pets` — the requester's own profiles, newest first.
pub async fn list<S>(
  State(state): State<AppState<S>>,
  AuthedAccount(account): AuthedAccount,
) -> Result<Json<Vec<ProfileWithCode>>, ApiError>
where
  S: RegistryStore + Clone + Send + Sync + 'static,
{
  let pets = state
    .store
    .list_profiles_for_owner(account.account_id)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(pets))
}

/// `GET /api/tutor/pets/{id}` — one owned profile with its tag code.
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<Uuid>,
  AuthedAccount(account): AuthedAccount,
) -> Result<Json<ProfileWithCode>, ApiError>
where
  S: RegistryStore + Clone + Send + Sync + 'static,
{
  let profile = state
    .store
    .get_profile(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or(pawtag_core::Error::ProfileNotFound(id))?;

  if profile.owner_id != account.account_id {
    return Err(pawtag_core::Error::Forbidden.into());
  }

  let identifier = state
    .store
    .get_identifier_by_id(profile.identifier_id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| {
      pawtag_core::Error::Storage("profile has no identifier".into())
    })?
    .0;

  Ok(Json(ProfileWithCode { profile, code: identifier.code }))
}

/// `PUT /api/tutor/pets/{id}` — partial update.
///
/// Field absent → unchanged; explicit `null` → cleared; mandatory contact
/// fields cannot be cleared. Ownership is enforced by the store.
pub async fn update<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<Uuid>,
  AuthedAccount(account): AuthedAccount,
  Json(patch): Json<ProfilePatch>,
) -> Result<Json<Profile>, ApiError>
where
  S: RegistryStore + Clone + Send + Sync + 'static,
{
  let profile = state
    .store
    .update_profile(id, account.account_id, patch)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(profile))
}

fn photo_extension(content_type: &str) -> Option<&'static str> {
  match content_type {
    "image/jpeg" => Some("jpg"),
    "image/png" => Some("png"),
    "image/webp" => Some("webp"),
    "image/gif" => Some("gif"),
    _ => None,
  }
}

/// `PUT /api/tutor/pets/{id}/photo` — raw image body.
///
/// The file lands in the configured photos directory under a content-hash
/// name and is served back via `/photos/...`; the profile stores only the
/// reference.
pub async fn upload_photo<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<Uuid>,
  AuthedAccount(account): AuthedAccount,
  headers: HeaderMap,
  body: Bytes,
) -> Result<Json<Profile>, ApiError>
where
  S: RegistryStore + Clone + Send + Sync + 'static,
{
  // Check ownership before any file I/O.
  let profile = state
    .store
    .get_profile(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or(pawtag_core::Error::ProfileNotFound(id))?;
  if profile.owner_id != account.account_id {
    return Err(pawtag_core::Error::Forbidden.into());
  }

  let content_type = headers
    .get(axum::http::header::CONTENT_TYPE)
    .and_then(|v| v.to_str().ok())
    .unwrap_or("");
  let Some(ext) = photo_extension(content_type) else {
    return Err(
      pawtag_core::Error::Validation(
        "unsupported image type; use JPEG, PNG, WebP or GIF".into(),
      )
      .into(),
    );
  };

  if body.is_empty() {
    return Err(pawtag_core::Error::Validation("no file uploaded".into()).into());
  }
  if body.len() > MAX_PHOTO_BYTES {
    return Err(
      pawtag_core::Error::Validation("file too large (max 5 MiB)".into()).into(),
    );
  }

  let digest = hex::encode(Sha256::digest(&body));
  let filename = format!("{id}-{}.{ext}", &digest[..16]);
  let dir = state.config.photos_dir.clone();

  tokio::fs::create_dir_all(&dir)
    .await
    .map_err(|e| pawtag_core::Error::Storage(e.to_string()))?;
  tokio::fs::write(dir.join(&filename), &body)
    .await
    .map_err(|e| pawtag_core::Error::Storage(e.to_string()))?;

  let patch = ProfilePatch {
    photo: Patch::Set(format!("/photos/{filename}")),
    ..ProfilePatch::default()
  };
  let profile = state
    .store
    .update_profile(id, account.account_id, patch)
    .await
    .map_err(ApiError::from_store)?;

  Ok(Json(profile))
}

/// `DELETE /api/tutor/pets/{id}/photo` — clear the photo reference.
pub async fn delete_photo<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<Uuid>,
  AuthedAccount(account): AuthedAccount,
) -> Result<Json<Profile>, ApiError>
where
  S: RegistryStore + Clone + Send + Sync + 'static,
{
  let patch = ProfilePatch { photo: Patch::Clear, ..ProfilePatch::default() };
  let profile = state
    .store
    .update_profile(id, account.account_id, patch)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(profile))
}
