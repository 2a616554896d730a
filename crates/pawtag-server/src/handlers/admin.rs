//! Administrative routes: batch provisioning, listing, export, stats.
//!
//! Every handler requires the Admin role. The role check yields `Forbidden`
//! for an authenticated non-admin and 401 for missing credentials (via the
//! extractor).

use axum::{
  Json,
  body::Body,
  extract::{Path, Query, State},
  http::{StatusCode, header},
  response::Response,
};
use pawtag_core::{
  account::Account,
  allocator,
  identifier::Identifier,
  profile::Profile,
  store::{
    DEFAULT_PAGE_SIZE, IdentifierSummary, ListQuery, Page, RegistryStore, Stats,
    StatusFilter,
  },
};
use pawtag_tags::ExportRecord;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{AppState, auth::AuthedAccount, error::ApiError};

fn require_admin(account: &Account) -> Result<(), ApiError> {
  if account.is_admin() {
    Ok(())
  } else {
    Err(pawtag_core::Error::Forbidden.into())
  }
}

// ─── Generate ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateBody {
  pub count: usize,
}

/// `POST /api/admin/identifiers/generate` — body: `{"count": 10}`
///
/// Reads the allocation tail, allocates the batch (bounds checked before
/// storage is touched) and persists it in one transaction. A concurrent
/// generation racing on the same tail loses on the UNIQUE code constraint
/// and surfaces as a retryable 409.
pub async fn generate<S>(
  State(state): State<AppState<S>>,
  AuthedAccount(account): AuthedAccount,
  Json(body): Json<GenerateBody>,
) -> Result<(StatusCode, Json<Vec<Identifier>>), ApiError>
where
  S: RegistryStore + Clone + Send + Sync + 'static,
{
  require_admin(&account)?;

  let last = state.store.last_code().await.map_err(ApiError::from_store)?;
  let codes = allocator::allocate_batch(last.as_deref(), body.count)?;

  let identifiers = state
    .store
    .insert_identifiers(codes)
    .await
    .map_err(ApiError::from_store)?;

  tracing::info!(count = identifiers.len(), "generated identifiers");
  Ok((StatusCode::CREATED, Json(identifiers)))
}

// ─── List ────────────────────────────────────────────────────────────────────

fn default_page() -> u32 { 1 }
fn default_page_size() -> u32 { DEFAULT_PAGE_SIZE }

#[derive(Debug, Deserialize)]
pub struct ListParams {
  #[serde(default)]
  pub filter:    StatusFilter,
  #[serde(default = "default_page")]
  pub page:      u32,
  #[serde(default = "default_page_size")]
  pub page_size: u32,
}

/// `GET /api/admin/identifiers?filter=all|unbound|bound&page=1&page_size=20`
pub async fn list<S>(
  State(state): State<AppState<S>>,
  AuthedAccount(account): AuthedAccount,
  Query(params): Query<ListParams>,
) -> Result<Json<Page<IdentifierSummary>>, ApiError>
where
  S: RegistryStore + Clone + Send + Sync + 'static,
{
  require_admin(&account)?;

  let page = state
    .store
    .list_identifiers(ListQuery {
      filter:    params.filter,
      page:      params.page,
      page_size: params.page_size,
    })
    .await
    .map_err(ApiError::from_store)?;

  Ok(Json(page))
}

// ─── Detail / delete ─────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct IdentifierDetail {
  #[serde(flatten)]
  pub identifier: Identifier,
  pub pet:        Option<Profile>,
}

/// `GET /api/admin/identifiers/{id}`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  AuthedAccount(account): AuthedAccount,
  Path(id): Path<Uuid>,
) -> Result<Json<IdentifierDetail>, ApiError>
where
  S: RegistryStore + Clone + Send + Sync + 'static,
{
  require_admin(&account)?;

  let (identifier, pet) = state
    .store
    .get_identifier_by_id(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| pawtag_core::Error::IdentifierNotFound(id.to_string()))?;

  Ok(Json(IdentifierDetail { identifier, pet }))
}

/// `DELETE /api/admin/identifiers/{id}` — only unbound identifiers can go.
pub async fn delete<S>(
  State(state): State<AppState<S>>,
  AuthedAccount(account): AuthedAccount,
  Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError>
where
  S: RegistryStore + Clone + Send + Sync + 'static,
{
  require_admin(&account)?;

  state
    .store
    .delete_identifier(id)
    .await
    .map_err(ApiError::from_store)?;

  Ok(StatusCode::NO_CONTENT)
}

// ─── Export ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
  #[default]
  Csv,
  Zip,
}

#[derive(Debug, Deserialize)]
pub struct ExportParams {
  #[serde(default)]
  pub format: ExportFormat,
  #[serde(default)]
  pub filter: StatusFilter,
}

fn filter_label(filter: StatusFilter) -> &'static str {
  match filter {
    StatusFilter::All => "all",
    StatusFilter::Unbound => "unbound",
    StatusFilter::Bound => "bound",
  }
}

/// `GET /api/admin/identifiers/export?format=csv|zip&filter=all|unbound|bound`
///
/// Rows are exported in the listing order (descending creation time).
pub async fn export<S>(
  State(state): State<AppState<S>>,
  AuthedAccount(account): AuthedAccount,
  Query(params): Query<ExportParams>,
) -> Result<Response, ApiError>
where
  S: RegistryStore + Clone + Send + Sync + 'static,
{
  require_admin(&account)?;

  let records: Vec<ExportRecord> = state
    .store
    .export_rows(params.filter)
    .await
    .map_err(ApiError::from_store)?
    .into_iter()
    .map(ExportRecord::from)
    .collect();

  let base_url = &state.config.base_url;
  let label = filter_label(params.filter);

  let (bytes, content_type, filename) = match params.format {
    ExportFormat::Csv => (
      pawtag_tags::write_csv(&records, base_url)?,
      "text/csv",
      format!("pawtag-identifiers-{label}.csv"),
    ),
    ExportFormat::Zip => (
      pawtag_tags::write_archive(&records, base_url)?,
      "application/zip",
      format!("pawtag-identifiers-{label}.zip"),
    ),
  };

  Ok(
    Response::builder()
      .status(StatusCode::OK)
      .header(header::CONTENT_TYPE, content_type)
      .header(
        header::CONTENT_DISPOSITION,
        format!("attachment; filename=\"{filename}\""),
      )
      .header(header::CONTENT_LENGTH, bytes.len())
      .body(Body::from(bytes))
      .unwrap(),
  )
}

// ─── Stats ───────────────────────────────────────────────────────────────────

/// `GET /api/admin/stats`
pub async fn stats<S>(
  State(state): State<AppState<S>>,
  AuthedAccount(account): AuthedAccount,
) -> Result<Json<Stats>, ApiError>
where
  S: RegistryStore + Clone + Send + Sync + 'static,
{
  require_admin(&account)?;

  let stats = state.store.stats().await.map_err(ApiError::from_store)?;
  Ok(Json(stats))
}
