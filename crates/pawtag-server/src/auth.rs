//! HTTP Basic-auth extractors backed by the account store.
//!
//! Credentials are verified per request against the stored argon2 hash; the
//! server keeps no session state. A 401 challenge tells the client to sign
//! in and retry the same URL, which is how an anonymous finder landing on an
//! unbound tag resumes after authenticating.

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, request::Parts};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as B64;

use pawtag_core::{account::Account, store::RegistryStore};

use crate::{AppState, error::ApiError};

/// Present in the handler means the request carried valid credentials.
pub struct AuthedAccount(pub Account);

/// Like [`AuthedAccount`], but absence of credentials is not an error —
/// used by the public pet view, where anonymous finders are first-class.
/// Credentials that are present but wrong still fail with 401.
pub struct MaybeAccount(pub Option<Account>);

/// Produce an argon2 PHC string for a new password.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
  let salt = argon2::password_hash::SaltString::generate(&mut rand_core::OsRng);
  Ok(
    Argon2::default()
      .hash_password(password.as_bytes(), &salt)?
      .to_string(),
  )
}

fn decode_basic(headers: &HeaderMap) -> Option<(String, String)> {
  let header_val = headers
    .get(axum::http::header::AUTHORIZATION)
    .and_then(|v| v.to_str().ok())?;
  let encoded = header_val.strip_prefix("Basic ")?;
  let decoded = B64.decode(encoded).ok()?;
  let creds = std::str::from_utf8(&decoded).ok()?;
  let (email, password) = creds.split_once(':')?;
  Some((email.to_owned(), password.to_owned()))
}

/// Verify credentials directly from headers against the account store.
pub async fn verify_auth<S>(headers: &HeaderMap, store: &S) -> Result<Account, ApiError>
where
  S: RegistryStore,
{
  let (email, password) =
    decode_basic(headers).ok_or(pawtag_core::Error::Unauthenticated)?;

  let account = store
    .find_account_by_email(&email)
    .await
    .map_err(ApiError::from_store)?
    .ok_or(pawtag_core::Error::Unauthenticated)?;

  let parsed_hash = PasswordHash::new(&account.password_hash)
    .map_err(|_| pawtag_core::Error::Unauthenticated)?;

  Argon2::default()
    .verify_password(password.as_bytes(), &parsed_hash)
    .map_err(|_| pawtag_core::Error::Unauthenticated)?;

  Ok(account)
}

impl<S> FromRequestParts<AppState<S>> for AuthedAccount
where
  S: RegistryStore + Clone + Send + Sync + 'static,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &AppState<S>,
  ) -> Result<Self, Self::Rejection> {
    let account = verify_auth(&parts.headers, state.store.as_ref()).await?;
    Ok(AuthedAccount(account))
  }
}

impl<S> FromRequestParts<AppState<S>> for MaybeAccount
where
  S: RegistryStore + Clone + Send + Sync + 'static,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &AppState<S>,
  ) -> Result<Self, Self::Rejection> {
    if !parts.headers.contains_key(axum::http::header::AUTHORIZATION) {
      return Ok(MaybeAccount(None));
    }
    let account = verify_auth(&parts.headers, state.store.as_ref()).await?;
    Ok(MaybeAccount(Some(account)))
  }
}
