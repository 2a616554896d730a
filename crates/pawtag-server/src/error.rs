//! API error type and axum `IntoResponse` implementation.
//!
//! Every response body carries a `retryable` flag so clients can distinguish
//! "correct your input / sign in and try again" from terminal conditions
//! without parsing messages.

use axum::{
  Json,
  http::{HeaderValue, StatusCode, header},
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Domain(#[from] pawtag_core::Error),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("artifact error: {0}")]
  Artifact(#[from] pawtag_tags::Error),
}

impl ApiError {
  /// Lift a store-level error into the domain taxonomy.
  pub fn from_store<E: Into<pawtag_core::Error>>(err: E) -> Self {
    ApiError::Domain(err.into())
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    use pawtag_core::Error as E;

    let (status, message, retryable) = match &self {
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone(), true),
      ApiError::Artifact(e) => {
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string(), true)
      }
      ApiError::Domain(e) => {
        let retryable = e.is_retryable();
        let (status, message) = match e {
          // The finder-facing message: a scanned tag nobody provisioned.
          E::IdentifierNotFound(_) => {
            (StatusCode::NOT_FOUND, "this tag is not registered".to_string())
          }
          E::ProfileNotFound(_) => (StatusCode::NOT_FOUND, "pet not found".to_string()),
          E::AccountNotFound(_) => {
            (StatusCode::NOT_FOUND, "account not found".to_string())
          }
          // Terminal: activation is intentionally irreversible.
          E::AlreadyActivated(_) => {
            (StatusCode::CONFLICT, "this tag is already registered".to_string())
          }
          E::Unauthenticated => {
            (StatusCode::UNAUTHORIZED, "authentication required".to_string())
          }
          E::Forbidden => (StatusCode::FORBIDDEN, "forbidden".to_string()),
          E::Validation(m) => (StatusCode::BAD_REQUEST, m.clone()),
          E::InvalidCount(_) => (StatusCode::BAD_REQUEST, e.to_string()),
          E::CodeCollision(_) => (StatusCode::CONFLICT, e.to_string()),
          E::BadCode(_) | E::CodeSpaceExhausted(_) | E::Storage(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
          }
        };
        (status, message, retryable)
      }
    };

    let mut res =
      (status, Json(json!({ "error": message, "retryable": retryable }))).into_response();

    if matches!(self, ApiError::Domain(pawtag_core::Error::Unauthenticated)) {
      res.headers_mut().insert(
        header::WWW_AUTHENTICATE,
        HeaderValue::from_static("Basic realm=\"pawtag\""),
      );
    }

    res
  }
}
