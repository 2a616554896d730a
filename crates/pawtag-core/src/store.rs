//! The `RegistryStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g. `pawtag-store-sqlite`).
//! Higher layers (`pawtag-server`) depend on this abstraction, not on any
//! concrete backend.

use std::future::Future;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  account::{Account, NewAccount},
  identifier::Identifier,
  profile::{NewProfile, Profile, ProfilePatch, ProfileWithCode},
};

// ─── Query types ─────────────────────────────────────────────────────────────

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Status filter for identifier listings and exports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
  #[default]
  All,
  Unbound,
  Bound,
}

/// Parameters for [`RegistryStore::list_identifiers`].
///
/// Out-of-range values are clamped, not rejected: `page` and `page_size`
/// below 1 become 1; `page_size` above [`MAX_PAGE_SIZE`] becomes
/// [`MAX_PAGE_SIZE`].
#[derive(Debug, Clone, Copy)]
pub struct ListQuery {
  pub filter:    StatusFilter,
  pub page:      u32,
  pub page_size: u32,
}

impl Default for ListQuery {
  fn default() -> Self {
    Self {
      filter:    StatusFilter::All,
      page:      1,
      page_size: DEFAULT_PAGE_SIZE,
    }
  }
}

impl ListQuery {
  pub fn clamped(self) -> Self {
    Self {
      filter:    self.filter,
      page:      self.page.max(1),
      page_size: self.page_size.clamp(1, MAX_PAGE_SIZE),
    }
  }

  /// Offset of the first row of this page. Assumes `self` is clamped.
  pub fn offset(&self) -> u64 {
    u64::from(self.page - 1) * u64::from(self.page_size)
  }
}

/// One page of results plus pagination metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
  pub items:       Vec<T>,
  pub page:        u32,
  pub page_size:   u32,
  pub total:       u64,
  pub total_pages: u32,
}

impl<T> Page<T> {
  pub fn new(items: Vec<T>, query: &ListQuery, total: u64) -> Self {
    let total_pages = total.div_ceil(u64::from(query.page_size)) as u32;
    Self {
      items,
      page: query.page,
      page_size: query.page_size,
      total,
      total_pages,
    }
  }
}

/// An identifier plus a summary of its linked profile, for listings and
/// exports.
#[derive(Debug, Clone, Serialize)]
pub struct IdentifierSummary {
  #[serde(flatten)]
  pub identifier:   Identifier,
  pub pet_name:     Option<String>,
  pub contact_name: Option<String>,
}

/// Registry-wide counters for the admin dashboard.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Stats {
  pub identifiers: u64,
  pub unbound:     u64,
  pub bound:       u64,
  pub profiles:    u64,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a pawtag registry backend.
///
/// Implementations must guarantee the two serialisation properties the
/// registry depends on: a UNIQUE constraint on codes (so concurrent batch
/// generation surfaces [`crate::Error::CodeCollision`] instead of silently
/// overwriting) and an atomic activation transaction (so exactly one of two
/// concurrent activations of the same code succeeds).
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait RegistryStore: Send + Sync {
  type Error: std::error::Error + Into<crate::Error> + Send + Sync + 'static;

  // ── Accounts ──────────────────────────────────────────────────────────

  /// Create and persist a new account. The email must be unused.
  fn add_account(
    &self,
    input: NewAccount,
  ) -> impl Future<Output = Result<Account, Self::Error>> + Send + '_;

  /// Look up an account by email. Returns `None` if not found.
  fn find_account_by_email<'a>(
    &'a self,
    email: &'a str,
  ) -> impl Future<Output = Result<Option<Account>, Self::Error>> + Send + 'a;

  // ── Identifiers ───────────────────────────────────────────────────────

  /// The numerically largest existing code, or `None` on an empty store.
  /// This is the allocation tail fed back into the allocator.
  fn last_code(
    &self,
  ) -> impl Future<Output = Result<Option<String>, Self::Error>> + Send + '_;

  /// Persist a batch of freshly allocated codes as `Unbound` identifiers,
  /// all in one transaction and in allocation order. A duplicate code fails
  /// the whole batch with [`crate::Error::CodeCollision`].
  fn insert_identifiers(
    &self,
    codes: Vec<String>,
  ) -> impl Future<Output = Result<Vec<Identifier>, Self::Error>> + Send + '_;

  /// Look up an identifier by code, together with its profile if bound.
  fn get_identifier_with_profile<'a>(
    &'a self,
    code: &'a str,
  ) -> impl Future<Output = Result<Option<(Identifier, Option<Profile>)>, Self::Error>>
  + Send
  + 'a;

  /// Look up an identifier by row id, together with its profile if bound.
  fn get_identifier_by_id(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<(Identifier, Option<Profile>)>, Self::Error>>
  + Send
  + '_;

  /// Administrative delete. Fails with [`crate::Error::IdentifierNotFound`]
  /// if absent and [`crate::Error::Validation`] if the identifier is bound.
  fn delete_identifier(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// List identifiers by descending creation time, filtered by status, with
  /// offset pagination. The query is clamped via [`ListQuery::clamped`].
  fn list_identifiers(
    &self,
    query: ListQuery,
  ) -> impl Future<Output = Result<Page<IdentifierSummary>, Self::Error>> + Send + '_;

  /// All identifiers matching `filter`, descending creation time, for
  /// export. No pagination.
  fn export_rows(
    &self,
    filter: StatusFilter,
  ) -> impl Future<Output = Result<Vec<IdentifierSummary>, Self::Error>> + Send + '_;

  /// Registry-wide counters.
  fn stats(&self) -> impl Future<Output = Result<Stats, Self::Error>> + Send + '_;

  // ── Activation ────────────────────────────────────────────────────────

  /// The one irreversible transition: atomically create a profile for
  /// `code` and flip the identifier to `Bound`. Fails with
  /// [`crate::Error::IdentifierNotFound`] or
  /// [`crate::Error::AlreadyActivated`]. Input validation is the caller's
  /// job ([`NewProfile::validate`]).
  fn activate<'a>(
    &'a self,
    code: &'a str,
    owner_id: Uuid,
    input: NewProfile,
  ) -> impl Future<Output = Result<Profile, Self::Error>> + Send + 'a;

  // ── Profiles ──────────────────────────────────────────────────────────

  /// Retrieve a profile by id. Returns `None` if not found.
  fn get_profile(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Profile>, Self::Error>> + Send + '_;

  /// A tutor's own profiles with their codes, newest first.
  fn list_profiles_for_owner(
    &self,
    owner_id: Uuid,
  ) -> impl Future<Output = Result<Vec<ProfileWithCode>, Self::Error>> + Send + '_;

  /// Apply a partial update. Ownership is re-checked here — fails with
  /// [`crate::Error::Forbidden`] unless `requester` owns the profile,
  /// regardless of what any view-layer predicate said.
  fn update_profile(
    &self,
    id: Uuid,
    requester: Uuid,
    patch: ProfilePatch,
  ) -> impl Future<Output = Result<Profile, Self::Error>> + Send + '_;
}
