//! Error types for `pawtag-core`.
//!
//! Every failure the registry can surface is a variant here, so callers can
//! always distinguish retryable conditions from terminal ones — see
//! [`Error::is_retryable`].

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  #[error("identifier not found: {0}")]
  IdentifierNotFound(String),

  #[error("profile not found: {0}")]
  ProfileNotFound(Uuid),

  #[error("account not found: {0}")]
  AccountNotFound(Uuid),

  /// Activation is irreversible; this is terminal, not retryable.
  #[error("identifier {0} is already activated")]
  AlreadyActivated(String),

  #[error("authentication required")]
  Unauthenticated,

  #[error("forbidden")]
  Forbidden,

  #[error("validation failed: {0}")]
  Validation(String),

  #[error("batch count {0} is out of range (1..=100)")]
  InvalidCount(usize),

  /// A concurrent writer allocated the same code first. Retryable.
  #[error("code collision: {0}")]
  CodeCollision(String),

  /// The stored tail code is not a width-5 decimal string. Indicates data
  /// corruption; surfaced, never silently recovered from.
  #[error("malformed code: {0:?}")]
  BadCode(String),

  #[error("code space exhausted after {0}")]
  CodeSpaceExhausted(String),

  /// Transient infrastructure failure. Safely retryable.
  #[error("storage error: {0}")]
  Storage(String),
}

impl Error {
  /// Whether the caller may meaningfully retry after correcting input or
  /// waiting out a transient condition.
  pub fn is_retryable(&self) -> bool {
    matches!(
      self,
      Error::Unauthenticated
        | Error::Validation(_)
        | Error::InvalidCount(_)
        | Error::CodeCollision(_)
        | Error::Storage(_)
    )
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
