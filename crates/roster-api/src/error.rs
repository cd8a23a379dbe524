//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::{JsonRejection, PathRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use roster_core::{ErrorKind, StoreError};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("method not allowed")]
  MethodNotAllowed,

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// Classify a store failure into the matching HTTP error.
  pub fn from_store<E: StoreError>(e: E) -> Self {
    match e.kind() {
      ErrorKind::Validation => ApiError::BadRequest(e.to_string()),
      ErrorKind::NotFound => ApiError::NotFound(e.to_string()),
      ErrorKind::Storage => ApiError::Store(Box::new(e)),
    }
  }
}

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    ApiError::BadRequest(rejection.body_text())
  }
}

impl From<PathRejection> for ApiError {
  fn from(rejection: PathRejection) -> Self {
    ApiError::BadRequest(rejection.body_text())
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::MethodNotAllowed => {
        (StatusCode::METHOD_NOT_ALLOWED, self.to_string())
      }
      ApiError::Store(e) => {
        tracing::error!(error = %e, "storage failure");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          "internal storage error".to_owned(),
        )
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
