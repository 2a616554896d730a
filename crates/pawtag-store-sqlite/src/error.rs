//! Error type for `pawtag-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("domain error: {0}")]
  Domain(#[from] pawtag_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// If `err` is a UNIQUE-constraint violation, the sqlite message naming the
/// violated column set (e.g. `"UNIQUE constraint failed: identifiers.code"`).
fn unique_violation(err: &tokio_rusqlite::Error) -> Option<&str> {
  let tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(failure, Some(msg))) = err
  else {
    return None;
  };
  (failure.code == rusqlite::ErrorCode::ConstraintViolation
    && msg.starts_with("UNIQUE constraint failed"))
  .then_some(msg.as_str())
}

impl From<Error> for pawtag_core::Error {
  /// Collapse into the domain taxonomy. Unique-constraint races on the code
  /// column become the retryable [`pawtag_core::Error::CodeCollision`];
  /// everything else infrastructural is a transient
  /// [`pawtag_core::Error::Storage`].
  fn from(err: Error) -> Self {
    match err {
      Error::Domain(e) => e,
      Error::Database(e) => match unique_violation(&e) {
        Some(msg) if msg.contains("identifiers.code") => {
          pawtag_core::Error::CodeCollision(msg.to_owned())
        }
        Some(msg) if msg.contains("accounts.email") => {
          pawtag_core::Error::Validation("email is already registered".into())
        }
        _ => pawtag_core::Error::Storage(e.to_string()),
      },
      other => pawtag_core::Error::Storage(other.to_string()),
    }
  }
}
