//! On-demand tag images.

use axum::{
  body::Body,
  extract::{Path, State},
  http::{StatusCode, header},
  response::Response,
};
use pawtag_core::store::RegistryStore;

use crate::{AppState, error::ApiError};

/// `GET /api/tags/{code}` — the PNG for an existing identifier.
///
/// Public, no authentication. Rendering is byte-deterministic, so the
/// response is immutable-cacheable and nothing is ever written to disk.
pub async fn handler<S>(
  State(state): State<AppState<S>>,
  Path(code): Path<String>,
) -> Result<Response, ApiError>
where
  S: RegistryStore + Clone + Send + Sync + 'static,
{
  let exists = state
    .store
    .get_identifier_with_profile(&code)
    .await
    .map_err(ApiError::from_store)?
    .is_some();
  if !exists {
    return Err(pawtag_core::Error::IdentifierNotFound(code).into());
  }

  let png = pawtag_tags::render_tag(&code, &state.config.base_url)?;

  Ok(
    Response::builder()
      .status(StatusCode::OK)
      .header(header::CONTENT_TYPE, "image/png")
      .header(header::CACHE_CONTROL, "public, max-age=31536000, immutable")
      .header(header::CONTENT_LENGTH, png.len())
      .body(Body::from(png))
      .unwrap(),
  )
}
